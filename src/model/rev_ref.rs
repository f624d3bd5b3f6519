//! `Ref` — a named entry point into the graph.

use super::commit::CommitId;
use super::intern::Symbol;

/// A named branch (`head == true`) or tag (`head == false`).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RevRef {
    /// Interned name. Equality is `Symbol` identity.
    pub name: Symbol,
    /// Head commit of this branch, or the tagged commit. `None` until
    /// resolved (a name was seen in aggregation but not yet given a chain).
    pub commit: Option<CommitId>,
    /// Depth hint from the source numbering scheme; larger = deeper.
    pub degree: i32,
    /// `true` for a branch, `false` for a tag.
    pub head: bool,
    /// Index, within the same `RevList.heads` this ref belongs to, of the
    /// branch this one attaches to. `None` means trunk (or an unattached
    /// tag). Stable because heads are appended-then-sorted exactly once,
    /// before any `parent` is computed.
    pub parent: Option<usize>,
    /// Longest path through the parent chain, root = 1. `0` means "not yet
    /// resolved".
    pub depth: i32,
    /// Set after merging: this branch is degenerate — its head commit is
    /// already owned by another branch's chain.
    pub tail: bool,
}

impl RevRef {
    #[must_use]
    pub fn new_head(name: Symbol, commit: Option<CommitId>, degree: i32) -> Self {
        Self {
            name,
            commit,
            degree,
            head: true,
            parent: None,
            depth: 0,
            tail: false,
        }
    }

    #[must_use]
    pub fn new_tag(name: Symbol, commit: Option<CommitId>, degree: i32) -> Self {
        Self {
            name,
            commit,
            degree,
            head: false,
            parent: None,
            depth: 0,
            tail: false,
        }
    }

    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.depth != 0
    }
}
