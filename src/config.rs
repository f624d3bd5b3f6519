//! Merge configuration.
//!
//! The algorithm has exactly one tunable constant: the window within which
//! two per-file commits with no `commitid` are assumed to be the same
//! logical commit. This crate exposes it as a `Duration` on [`MergeConfig`]
//! instead of hiding it as a magic number.

use std::time::Duration;

/// Tunable parameters for [`crate::list_merge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeConfig {
    /// Two commits with no `commitid` and the same log match if their dates
    /// fall within this window of each other. Default: one hour.
    pub commit_window: Duration,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            commit_window: Duration::from_secs(60 * 60),
        }
    }
}
