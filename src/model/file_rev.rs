//! `FileRev` — one revision of one file.

use std::num::NonZeroU32;

use super::intern::Symbol;
use super::number::RevisionNumber;
use super::time::Timestamp;

/// Handle to a [`FileRev`] stored in a [`FileArena`].
///
/// Two `FileRevId`s are equal iff they name the same arena slot, so two
/// distinct `FileRev` constructions never compare equal by identity even if
/// their fields match. Its `Ord` impl orders by allocation order, which is
/// just as good a deterministic total order as a pointer value would be,
/// and is portable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct FileRevId(NonZeroU32);

impl FileRevId {
    fn from_index(index: usize) -> Self {
        let n = u32::try_from(index + 1).expect("file arena exceeded u32::MAX entries");
        Self(NonZeroU32::new(n).expect("index + 1 is never zero"))
    }

    fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// An immutable record describing one revision of one file.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileRev {
    /// Interned file name/path.
    pub name: Symbol,
    /// Ordered version number (e.g. `1.2.2.4`).
    pub number: RevisionNumber,
    /// When this revision was recorded.
    pub date: Timestamp,
}

/// Owns every [`FileRev`] allocated during one merge session.
///
/// A single `FileArena` is shared by every input `RevList` and the merged
/// output, so that `FileRevId`s (and thus identity comparisons) stay valid
/// across the whole `list_merge` call.
#[derive(Default)]
pub struct FileArena {
    slots: Vec<FileRev>,
}

impl FileArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new file revision. This is the crate's `file_rev`
    /// external entry point, used by upstream parsing collaborators to
    /// populate a [`crate::RevGraph`].
    pub fn file_rev(&mut self, name: Symbol, number: RevisionNumber, date: Timestamp) -> FileRevId {
        self.slots.push(FileRev { name, number, date });
        FileRevId::from_index(self.slots.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: FileRevId) -> &FileRev {
        &self.slots[id.to_index()]
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
