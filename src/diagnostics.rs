//! Soft diagnostics: data-quality warnings and attachment failures that the
//! algorithm routes around instead of aborting.
//!
//! Every diagnostic is both logged through `tracing` (the way `maw-core`
//! instruments its pipeline) and collected into a [`Diagnostics`] list so
//! library callers can assert on or render them without scraping stderr.

use tracing::{error, warn};

/// One soft diagnostic emitted during a merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A branch's attachment point in its parent was found by content
    /// match, but dated later than the branch's own last commit — likely
    /// clock skew between the two chains.
    BranchPointLaterThanBranch { child: String, parent: String },
    /// No content match was found for a branch's attachment point; it was
    /// matched by date instead.
    BranchPointMatchedByDate { child: String, parent: String },
    /// No attachment point was found at all; a synthetic terminal commit
    /// was used instead so the chain stays well-formed.
    BranchPointNotFound {
        child: String,
        parent: String,
        /// Name of another branch (anywhere in the merged output) that
        /// contains a commit matching the unattached residual, if any.
        possible_match: Option<String>,
    },
    /// Two input rev_lists disagree about a head's parent branch, and
    /// neither candidate is an ancestor of the other.
    BranchNameCollision { first: String, second: String },
    /// An input tag name could not be placed anywhere in the merged graph.
    LostTag { name: String },
}

impl Diagnostic {
    fn log(&self) {
        match self {
            Self::BranchPointLaterThanBranch { child, parent } => {
                warn!("Warning: branch point {child} -> {parent} later than branch");
            }
            Self::BranchPointMatchedByDate { child, parent } => {
                warn!("Warning: branch point {child} -> {parent} matched by date");
            }
            Self::BranchPointNotFound {
                child,
                parent,
                possible_match,
            } => {
                if let Some(m) = possible_match {
                    error!("Error: branch point {child} -> {parent} not found. Possible match on {m}.");
                } else {
                    error!("Error: branch point {child} -> {parent} not found.");
                }
            }
            Self::BranchNameCollision { first, second } => {
                error!("Branch name collision:\n\tfirst branch: {first}\n\tsecond branch: {second}");
            }
            Self::LostTag { name } => {
                warn!("lost tag {name}");
            }
        }
    }
}

/// Ordered collection of everything [`crate::list_merge`] reported while
/// building a [`crate::model::RevList`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic: log it through `tracing` and append it to the
    /// collection.
    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.0.push(diagnostic);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
