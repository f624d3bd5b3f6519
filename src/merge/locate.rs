//! Locating commits on already-merged branches: the attach step that finds
//! where a branch's chain grafts onto its parent, and the tag-placement
//! lookup that finds where a tag's target commit ended up.
//!
//! Heads live in a single `Vec` sorted by degree (see `model::RevRef`'s doc
//! comment), with root branches first and deeper branches later. [`locate`]
//! climbs a branch to its root and then scans root-to-deepest, so when a
//! commit matches on more than one head the scan prefers the *last* (deepest,
//! highest-degree) match — this tie-break matters when the same content
//! shows up on both a branch and one of its descendants.

use crate::config::MergeConfig;
use crate::model::{CommitId, RevGraph, RevList, Timestamp};

use super::commit_match::commits_match;

/// Scan `branch_idx`'s chain (if any) for a commit matching `target` by
/// content.
pub(crate) fn locate_one(
    graph: &RevGraph,
    config: &MergeConfig,
    out: &RevList,
    branch_idx: Option<usize>,
    target: CommitId,
) -> Option<CommitId> {
    let idx = branch_idx?;
    let mut c = out.heads[idx].commit;
    while let Some(cid) = c {
        if commits_match(graph, config, cid, target) {
            return Some(cid);
        }
        c = graph.commit(cid).parent;
    }
    None
}

/// First commit on `branch_idx`'s chain whose date is at or before `date`.
pub(crate) fn locate_by_date(graph: &RevGraph, out: &RevList, branch_idx: usize, date: Timestamp) -> Option<CommitId> {
    let mut c = out.heads[branch_idx].commit;
    while let Some(cid) = c {
        if graph.commit(cid).date <= date {
            return Some(cid);
        }
        c = graph.commit(cid).parent;
    }
    None
}

/// Full tag-placement lookup: try `branch_idx` directly, then climb to the
/// root of its parent chain and scan every head from the root onward,
/// preferring the deepest (last) match over the shallowest.
pub(crate) fn locate(
    graph: &RevGraph,
    config: &MergeConfig,
    out: &RevList,
    branch_idx: usize,
    target: CommitId,
) -> Option<CommitId> {
    if let Some(c) = locate_one(graph, config, out, Some(branch_idx), target) {
        return Some(c);
    }
    let mut root = branch_idx;
    while let Some(p) = out.heads[root].parent {
        root = p;
    }
    (root..out.heads.len())
        .rev()
        .find_map(|idx| locate_one(graph, config, out, Some(idx), target))
}

/// Find the (non-degenerate) head whose chain contains a commit matching
/// `target`, stopping at each head's `tail` commit.
pub(crate) fn branch_of_commit(graph: &RevGraph, config: &MergeConfig, out: &RevList, target: CommitId) -> Option<usize> {
    for (idx, h) in out.heads.iter().enumerate() {
        if h.tail {
            continue;
        }
        let mut c = h.commit;
        while let Some(cid) = c {
            if commits_match(graph, config, cid, target) {
                return Some(idx);
            }
            if graph.commit(cid).tail {
                break;
            }
            c = graph.commit(cid).parent;
        }
    }
    None
}
