//! `commits_match` — the algorithmic heart of the merge.
//!
//! An exact `commitid` match wins outright; a `commitid` on only one side is
//! an automatic non-match; otherwise two commits are "the same logical
//! commit" if they fall within [`MergeConfig::commit_window`] of each other
//! and share an (interned) log message.

use crate::config::MergeConfig;
use crate::model::{CommitId, RevGraph};

/// `commitid` alone decides the outcome when both sides carry one — it is
/// not additionally required to agree with log identity.
pub(crate) fn commits_match(graph: &RevGraph, config: &MergeConfig, a: CommitId, b: CommitId) -> bool {
    let ca = graph.commit(a);
    let cb = graph.commit(b);
    match (&ca.commit_id, &cb.commit_id) {
        (Some(x), Some(y)) => x == y,
        (Some(_), None) | (None, Some(_)) => false,
        (None, None) => ca.date.abs_diff(cb.date) < config.commit_window && ca.log == cb.log,
    }
}
