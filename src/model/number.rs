//! Per-file revision numbers (e.g. CVS/RCS-style `1.2.2.4`).

use std::fmt;

/// An ordered version number: a tuple of small non-negative integers.
///
/// Compared lexicographically by component, then by length — `1.2` sorts
/// before `1.2.1`, and `1.2` sorts before `1.3`. The merge core itself never
/// compares these (ordering along a chain comes from `parent` links and
/// dates); this type exists so upstream parsing collaborators have
/// somewhere to put the number when constructing a [`super::FileRev`], and
/// so diagnostics can render it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct RevisionNumber(Vec<u32>);

impl RevisionNumber {
    #[must_use]
    pub fn new(components: impl Into<Vec<u32>>) -> Self {
        Self(components.into())
    }

    #[must_use]
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// `true` if this revision is on the branch identified by `branch_point`,
    /// i.e. `branch_point` is a prefix of `self` one component shorter plus
    /// a branch-number component (the classic RCS `a.b.c.d` test).
    #[must_use]
    pub fn is_on_branch(&self, branch_point: &Self) -> bool {
        self.0.len() > branch_point.0.len() && self.0[..branch_point.0.len()] == branch_point.0[..]
    }
}

impl fmt::Display for RevisionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
