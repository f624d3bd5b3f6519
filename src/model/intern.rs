//! String interning seam.
//!
//! The merge core never compares branch names or log messages by string
//! value — it relies entirely on identity equality, on the assumption that
//! upstream parsing has already interned every name and log message it
//! hands to this crate. [`Symbol`] is the handle that contract is expressed
//! through; [`Interner`] is a small convenience implementation of that seam
//! for callers (and this crate's own tests) that don't already have one.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// An interned string. Equality and hashing are by pointer identity, not by
/// string content — two `Symbol`s holding equal text are only `==` if they
/// were produced from the same [`Interner`] (or otherwise share the same
/// `Rc<str>` allocation).
#[derive(Clone, Debug, Eq)]
pub struct Symbol(Rc<str>);

impl Symbol {
    /// Wrap an already-unique allocation as a `Symbol` without interning it.
    ///
    /// Useful when a caller has its own interning scheme and just needs to
    /// hand this crate a handle; two calls with the same text produce two
    /// *distinct* symbols, which is almost never what a test wants — use
    /// [`Interner::intern`] for that instead.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(Rc::from(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.0).cast::<()>() as usize).hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Guarantees identity equality for logically-identical strings.
///
/// Upstream parsing collaborators are expected to hold one of these per
/// parse session and intern every branch
/// name, tag name, and log message through it before constructing
/// [`crate::model::FileRev`]/[`crate::model::Commit`] values.
#[derive(Default)]
pub struct Interner {
    table: std::collections::HashMap<Box<str>, Symbol>,
}

impl Interner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the `Symbol` for `text`, reusing a previous allocation if
    /// `text` has been interned before.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(sym) = self.table.get(text) {
            return sym.clone();
        }
        let sym = Symbol::new(text);
        self.table.insert(Box::from(text), sym.clone());
        sym
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
