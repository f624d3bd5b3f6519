//! Tail marker.
//!
//! Walk every head's chain, incrementing each visited commit's `seen`
//! reachability counter and stamping the first commit where a chain
//! rejoins already-visited history with `tail = true`. A head whose own
//! commit was already `seen` before this head even started is itself
//! degenerate (`RevRef::tail`) — its chain contributes nothing new.
//!
//! Tag commits get their `tagged` flag set later, at tag-placement time
//! (`super::tag::place_one`), since that's the only point in the pipeline
//! where a tag's target commit in the merged graph is actually known.

use crate::model::{RevGraph, RevList};

/// Stamp `seen` and `tail` across every head's chain.
pub(crate) fn set_tail(graph: &mut RevGraph, out: &mut RevList) {
    for idx in 0..out.heads.len() {
        let Some(head_commit) = out.heads[idx].commit else {
            continue;
        };

        let mut tail = true;
        if graph.commit(head_commit).seen > 0 {
            out.heads[idx].tail = true;
            tail = false;
        }

        let mut c = Some(head_commit);
        while let Some(cid) = c {
            if tail {
                if let Some(pid) = graph.commit(cid).parent {
                    if graph.commit(cid).seen < graph.commit(pid).seen {
                        graph.commit_mut(cid).tail = true;
                        tail = false;
                    }
                }
            }
            graph.commit_mut(cid).seen += 1;
            c = graph.commit(cid).parent;
        }
        graph.commit_mut(head_commit).tagged = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Commit, RevRef, RevisionNumber, Symbol, Timestamp};

    fn push(graph: &mut RevGraph, date: i64, parent: Option<crate::model::CommitId>) -> crate::model::CommitId {
        let f = graph.file_rev(Symbol::new("a.c"), RevisionNumber::new([1, 1]), Timestamp::from(date));
        graph.add_commit(Commit {
            date: Timestamp::from(date),
            commit_id: None,
            log: Symbol::new("l"),
            files: vec![f],
            parent,
            tail: false,
            tailed: false,
            seen: 0,
            tagged: false,
        })
    }

    #[test]
    fn linear_single_head_every_commit_seen_once() {
        let mut graph = RevGraph::new();
        let c1 = push(&mut graph, 100, None);
        let c2 = push(&mut graph, 200, Some(c1));
        let c3 = push(&mut graph, 300, Some(c2));
        let mut out = RevList::new();
        out.add_head(RevRef::new_head(Symbol::new("trunk"), Some(c3), 1));

        set_tail(&mut graph, &mut out);

        assert_eq!(graph.commit(c1).seen, 1);
        assert_eq!(graph.commit(c2).seen, 1);
        assert_eq!(graph.commit(c3).seen, 1);
        assert!(!graph.commit(c1).tail);
        assert!(!graph.commit(c2).tail);
        assert!(!graph.commit(c3).tail);
        assert!(graph.commit(c3).tagged);
    }

    #[test]
    fn shared_history_marks_the_divergence_point_tail() {
        // trunk: c1 <- c2 <- c3; br shares c1..c2 and has its own tip c4
        // pointing back into c2 (simulating the attach step's link).
        let mut graph = RevGraph::new();
        let c1 = push(&mut graph, 100, None);
        let c2 = push(&mut graph, 200, Some(c1));
        let c3 = push(&mut graph, 300, Some(c2));
        let c4 = push(&mut graph, 250, Some(c2));

        let mut out = RevList::new();
        out.add_head(RevRef::new_head(Symbol::new("trunk"), Some(c3), 1));
        out.add_head(RevRef::new_head(Symbol::new("br"), Some(c4), 2));

        set_tail(&mut graph, &mut out);

        // trunk walks first: seen becomes 1 for c1, c2, c3.
        // br walks next: c4 is br's own unique commit, but its parent c2
        // was already seen once by trunk, so c4 is where br's chain
        // rejoins shared history — exactly the `tail` commit.
        assert!(graph.commit(c4).tail, "c4 is br's attachment point into trunk");
        assert!(!graph.commit(c2).tail, "c2 belongs to trunk's own unique prefix");
        assert_eq!(graph.commit(c2).seen, 2);
        assert_eq!(graph.commit(c4).seen, 1);
        assert!(!out.heads[1].tail, "br's head commit c4 was never seen before br's own walk");
    }

    #[test]
    fn degenerate_head_pointing_at_already_seen_commit_is_marked_tail() {
        let mut graph = RevGraph::new();
        let c1 = push(&mut graph, 100, None);
        let mut out = RevList::new();
        out.add_head(RevRef::new_head(Symbol::new("trunk"), Some(c1), 1));
        out.add_head(RevRef::new_head(Symbol::new("dup"), Some(c1), 2));

        set_tail(&mut graph, &mut out);

        assert!(!out.heads[0].tail);
        assert!(out.heads[1].tail, "dup's head commit was already seen by trunk");
    }
}
