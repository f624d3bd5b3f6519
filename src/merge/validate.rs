//! Post-merge validation: walk every non-degenerate head's chain to its
//! first `tail` commit.
//!
//! This intentionally does not assert date monotonicity between a commit
//! and its parent — real-world clock skew between files makes that too
//! noisy to enforce. The walk exists purely to confirm every chain
//! terminates cleanly at a `tail` commit or the root, and is logged for
//! observability rather than asserted on, since malformed input should
//! surface as a `MergeError` earlier in the pipeline, not here.

use tracing::debug;

use crate::model::{RevGraph, RevList};

/// Walk every non-degenerate head's chain to its first `tail` commit.
pub(crate) fn validate(graph: &RevGraph, out: &RevList) {
    for head in &out.heads {
        if head.tail {
            continue;
        }
        let mut visited = 0usize;
        let mut c = head.commit;
        while let Some(cid) = c {
            let commit = graph.commit(cid);
            visited += 1;
            let Some(parent) = commit.parent else {
                break;
            };
            if commit.tail {
                break;
            }
            c = Some(parent);
        }
        debug!(branch = %head.name, visited, "validated branch chain");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Commit, RevRef, RevisionNumber, Symbol, Timestamp};

    #[test]
    fn stops_at_tail_commit_without_panicking() {
        let mut graph = RevGraph::new();
        let f = graph.file_rev(Symbol::new("a.c"), RevisionNumber::new([1, 1]), Timestamp::from(100));
        let parent = graph.add_commit(Commit {
            date: Timestamp::from(100),
            commit_id: None,
            log: Symbol::new("l"),
            files: vec![f],
            parent: None,
            tail: false,
            tailed: false,
            seen: 0,
            tagged: false,
        });
        let f2 = graph.file_rev(Symbol::new("a.c"), RevisionNumber::new([1, 2]), Timestamp::from(200));
        let tail_commit = graph.add_commit(Commit {
            date: Timestamp::from(200),
            commit_id: None,
            log: Symbol::new("l2"),
            files: vec![f2],
            parent: Some(parent),
            tail: true,
            tailed: false,
            seen: 0,
            tagged: false,
        });

        let mut out = RevList::new();
        out.add_head(RevRef::new_head(Symbol::new("br"), Some(tail_commit), 2));

        validate(&graph, &out);
    }

    #[test]
    fn skips_degenerate_heads() {
        let graph = RevGraph::new();
        let mut out = RevList::new();
        let mut degenerate = RevRef::new_head(Symbol::new("dup"), None, 1);
        degenerate.tail = true;
        out.add_head(degenerate);

        validate(&graph, &out);
    }
}
