//! Shared commit ordering.
//!
//! Both the branch merger and the tag placer need the same comparator: newer
//! commits first, `None` entries last, `tailed` commits pushed behind live
//! ones, ties on date broken by the (arena-index) identity of the commit's
//! first file. Keeping it in one place means `branch::merge_one` and
//! `tag::tag_search` can never drift apart on tie-break rules.

use std::cmp::Ordering;

use crate::model::{CommitId, RevGraph};

/// Compare two optional commits for the descending-date scratch sort used
/// while walking branch chains in lockstep.
pub(crate) fn cmp_commits(graph: &RevGraph, a: Option<CommitId>, b: Option<CommitId>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(ca), Some(cb)) => {
            let ca = graph.commit(ca);
            let cb = graph.commit(cb);
            if ca.tailed != cb.tailed {
                return ca.tailed.cmp(&cb.tailed);
            }
            match cb.date.cmp(&ca.date) {
                Ordering::Equal => {}
                newer_first => return newer_first,
            }
            match (ca.files.first(), cb.files.first()) {
                (Some(fa), Some(fb)) => fb.cmp(fa),
                _ => Ordering::Equal,
            }
        }
    }
}

/// Sort `commits` newest-first (per [`cmp_commits`]) and drop every `None`
/// entry.
pub(crate) fn date_sort_and_trim(graph: &RevGraph, commits: &mut Vec<Option<CommitId>>) {
    commits.sort_by(|&a, &b| cmp_commits(graph, a, b));
    commits.retain(Option::is_some);
}
