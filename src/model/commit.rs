//! `Commit` — one node in a branch chain.

use std::fmt;
use std::num::NonZeroU32;
use std::rc::Rc;

use super::file_rev::FileRevId;
use super::intern::Symbol;
use super::time::Timestamp;

/// An opaque patch-set identifier (CVS's `commitid`).
///
/// Unlike [`Symbol`], equality here is by *value*: `commitid` is a content
/// token computed by the source VCS, not a handle guaranteed to be
/// interned, so two equal-looking ids from different parses must still
/// compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PatchSetId(Rc<str>);

impl PatchSetId {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(Rc::from(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatchSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle to a [`Commit`] stored in a [`CommitArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CommitId(NonZeroU32);

impl CommitId {
    fn from_index(index: usize) -> Self {
        let n = u32::try_from(index + 1).expect("commit arena exceeded u32::MAX entries");
        Self(NonZeroU32::new(n).expect("index + 1 is never zero"))
    }

    fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// A node in a branch chain — either a per-file commit (as supplied by an
/// input `RevList`, `files.len() == 1`) or a merged whole-tree commit
/// (as built by [`crate::merge::branch`]).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    pub date: Timestamp,
    /// Present only in modern CVS input; an exact match key when both sides
    /// of a comparison carry one.
    pub commit_id: Option<PatchSetId>,
    /// Interned log message. Equality is `Symbol` identity.
    pub log: Symbol,
    /// At most one [`FileRevId`] per logical file.
    pub files: Vec<FileRevId>,
    pub parent: Option<CommitId>,
    /// This commit's `parent` lies on a different branch — the attachment
    /// point into the parent branch's chain.
    pub tail: bool,
    /// Transient scratch flag used during [`crate::merge::branch`] merging.
    pub(crate) tailed: bool,
    /// How many non-degenerate heads reach this commit, populated by
    /// [`crate::merge::tail::set_tail`].
    pub seen: u32,
    /// A head or tag points directly at this commit.
    pub tagged: bool,
}

impl Commit {
    #[must_use]
    pub fn nfiles(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn has_file(&self, file: FileRevId) -> bool {
        self.files.contains(&file)
    }
}

/// Owns every [`Commit`] allocated during one merge session.
#[derive(Default)]
pub struct CommitArena {
    slots: Vec<Commit>,
}

impl CommitArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new commit node and return its id. Used both by upstream
    /// parsing collaborators (to build input per-file chains) and
    /// internally by the branch merger (to build whole-tree commits).
    pub fn insert(&mut self, commit: Commit) -> CommitId {
        self.slots.push(commit);
        CommitId::from_index(self.slots.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: CommitId) -> &Commit {
        &self.slots[id.to_index()]
    }

    pub fn get_mut(&mut self, id: CommitId) -> &mut Commit {
        &mut self.slots[id.to_index()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::number::RevisionNumber;

    fn file(arena: &mut super::super::file_rev::FileArena, name: &str, date: i64) -> FileRevId {
        arena.file_rev(Symbol::new(name), RevisionNumber::new([1, 1]), Timestamp::from(date))
    }

    #[test]
    fn commit_ids_are_distinct_per_insert() {
        let mut files = super::super::file_rev::FileArena::new();
        let f = file(&mut files, "a.c", 1);
        let mut commits = CommitArena::new();
        let mk = |log: &str| Commit {
            date: Timestamp::from(1),
            commit_id: None,
            log: Symbol::new(log),
            files: vec![f],
            parent: None,
            tail: false,
            tailed: false,
            seen: 0,
            tagged: false,
        };
        let a = commits.insert(mk("l"));
        let b = commits.insert(mk("l"));
        assert_ne!(a, b);
    }

    #[test]
    fn patch_set_id_is_value_equal_not_identity() {
        let a = PatchSetId::new("abc123");
        let b = PatchSetId::new("abc123");
        assert_eq!(a, b, "commitid is a content token, not an interned handle");
    }

    #[test]
    fn nfiles_and_has_file() {
        let mut files = super::super::file_rev::FileArena::new();
        let f1 = file(&mut files, "a.c", 1);
        let f2 = file(&mut files, "b.c", 2);
        let c = Commit {
            date: Timestamp::from(1),
            commit_id: None,
            log: Symbol::new("l"),
            files: vec![f1],
            parent: None,
            tail: false,
            tailed: false,
            seen: 0,
            tagged: false,
        };
        assert_eq!(c.nfiles(), 1);
        assert!(c.has_file(f1));
        assert!(!c.has_file(f2));
    }
}
