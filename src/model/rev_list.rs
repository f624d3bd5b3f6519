//! `RevList` — a container of branch and tag refs.

use super::intern::Symbol;
use super::rev_ref::RevRef;

/// An ordered list of branch refs (`heads`) and tag refs (`tags`).
///
/// Order is significant and observable: after [`crate::merge::aggregate`]
/// and the degree sort, iteration order is ascending by degree with
/// discovery order preserved among ties.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RevList {
    pub heads: Vec<RevRef>,
    pub tags: Vec<RevRef>,
}

impl RevList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new branch ref. Order of insertion is preserved.
    pub fn add_head(&mut self, r: RevRef) -> usize {
        debug_assert!(r.head);
        self.heads.push(r);
        self.heads.len() - 1
    }

    /// Append a new tag ref.
    pub fn add_tag(&mut self, r: RevRef) -> usize {
        debug_assert!(!r.head);
        self.tags.push(r);
        self.tags.len() - 1
    }

    /// Find a head by name (identity equality on `Symbol`).
    #[must_use]
    pub fn find_head(&self, name: &Symbol) -> Option<usize> {
        self.heads.iter().position(|h| &h.name == name)
    }

    /// Find a tag by name (identity equality on `Symbol`).
    #[must_use]
    pub fn find_tag(&self, name: &Symbol) -> Option<usize> {
        self.tags.iter().position(|t| &t.name == name)
    }
}
