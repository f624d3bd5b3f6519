//! Data model: file revisions, commits, refs, and the `RevList` container
//! they live in, plus the arena that owns them for the lifetime of one
//! merge session.

pub mod commit;
pub mod file_rev;
pub mod intern;
pub mod number;
pub mod rev_list;
pub mod rev_ref;
pub mod time;

pub use commit::{Commit, CommitArena, CommitId, PatchSetId};
pub use file_rev::{FileArena, FileRev, FileRevId};
pub use intern::{Interner, Symbol};
pub use number::RevisionNumber;
pub use rev_list::RevList;
pub use rev_ref::RevRef;
pub use time::Timestamp;

/// Owns every [`FileRev`] and [`Commit`] allocated across one merge session:
/// every input `RevList` plus the merged output share a single `RevGraph`,
/// so that arena handles stay valid for identity comparisons across all of
/// them.
#[derive(Default)]
pub struct RevGraph {
    pub files: FileArena,
    pub commits: CommitArena,
}

impl RevGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new file revision (the crate's `file_rev` external entry
    /// point).
    pub fn file_rev(&mut self, name: Symbol, number: RevisionNumber, date: Timestamp) -> FileRevId {
        self.files.file_rev(name, number, date)
    }

    /// Construct a new commit node.
    pub fn add_commit(&mut self, commit: Commit) -> CommitId {
        self.commits.insert(commit)
    }

    #[must_use]
    pub fn commit(&self, id: CommitId) -> &Commit {
        self.commits.get(id)
    }

    pub fn commit_mut(&mut self, id: CommitId) -> &mut Commit {
        self.commits.get_mut(id)
    }

    #[must_use]
    pub fn file(&self, id: FileRevId) -> &FileRev {
        self.files.get(id)
    }
}
