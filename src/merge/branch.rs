//! Branch merge — the hot path.
//!
//! Walk every input branch of the same name in lockstep, newest commit
//! first, coalescing per-file commits that [`super::commit_match::commits_match`]
//! and advancing only the ones that matched, until every input chain has
//! either run out or paused at its own branch point. Then attach the
//! resulting chain to its parent branch.

use tracing::instrument;

use crate::config::MergeConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::MergeError;
use crate::model::{Commit, CommitId, RevGraph, RevList};

use super::commit_match::commits_match;
use super::locate;
use super::order::date_sort_and_trim;

/// Build one whole-tree [`Commit`] from the current newest-first `commits`:
/// date/`commit_id`/log copied from `commits[0]`, files concatenated from
/// the first file of every entry that has one. Shared by the per-iteration
/// merge step and the end-of-chain synthesis fallback.
///
/// # Errors
/// Returns [`MergeError::DuplicateFileInCommit`] if two entries' leading
/// files collide — a violation of the "distinct `FileRev` per commit"
/// invariant.
pub(crate) fn build_commit(graph: &mut RevGraph, commits: &[CommitId], branch: &str) -> Result<CommitId, MergeError> {
    let first = commits[0];
    let date = graph.commit(first).date;
    let commit_id = graph.commit(first).commit_id.clone();
    let log = graph.commit(first).log.clone();

    let mut files = Vec::with_capacity(commits.len());
    for &cid in commits {
        if let Some(&f) = graph.commit(cid).files.first() {
            if files.contains(&f) {
                return Err(MergeError::DuplicateFileInCommit {
                    branch: branch.to_owned(),
                });
            }
            files.push(f);
        }
    }

    Ok(graph.add_commit(Commit {
        date,
        commit_id,
        log,
        files,
        parent: None,
        tail: false,
        tailed: false,
        seen: 0,
        tagged: false,
    }))
}

/// Merge every input branch named `out.heads[head_idx].name` into a single
/// whole-tree chain, then attach it to its parent branch.
///
/// Must run after [`super::parent::resolve_parents`] (needs `parent`/`depth`)
/// and in ascending-degree order (needs the parent branch's own chain
/// already merged — the degree sort guarantees this when callers walk
/// `out.heads` in order).
///
/// # Errors
/// Propagates [`MergeError::DuplicateFileInCommit`] from [`build_commit`].
#[instrument(skip(graph, config, inputs, out, diagnostics), fields(branch = %out.heads[head_idx].name))]
pub(crate) fn merge_one(
    graph: &mut RevGraph,
    config: &MergeConfig,
    inputs: &[RevList],
    out: &mut RevList,
    head_idx: usize,
    diagnostics: &mut Diagnostics,
) -> Result<(), MergeError> {
    let name = out.heads[head_idx].name.clone();
    let branch_name = name.as_str().to_owned();

    // Locate this branch in every input, initializing the lockstep cursors.
    let mut commits: Vec<Option<CommitId>> = Vec::new();
    let mut nlive: usize = 0;
    for input in inputs {
        let Some(idx) = input.find_head(&name) else {
            continue;
        };
        let r = &input.heads[idx];
        commits.push(r.commit);
        if r.tail {
            if let Some(cid) = r.commit {
                graph.commit_mut(cid).tailed = true;
            }
        } else {
            nlive += 1;
        }
    }

    if commits.is_empty() {
        return Ok(());
    }

    // Walk down every branch until each has merged with the parent branch.
    let mut built: Vec<CommitId> = Vec::new();
    while nlive > 0 && !commits.is_empty() {
        date_sort_and_trim(graph, &mut commits);
        if commits.is_empty() {
            break;
        }
        let live: Vec<CommitId> = commits.iter().map(|c| c.expect("trimmed to all-Some")).collect();

        let commit = build_commit(graph, &live, &branch_name)?;
        built.push(commit);

        // Step each branch, newest cursor last so earlier steps can still
        // compare against the still-untouched `live[0]`.
        nlive = 0;
        let newest = live[0];
        for k in (0..live.len()).rev() {
            let cid = live[k];
            if graph.commit(cid).tailed {
                continue;
            }
            if k == 0 || commits_match(graph, config, newest, cid) {
                let parent = graph.commit(cid).parent;
                if graph.commit(cid).tail {
                    let p = parent.expect("a tail commit always carries a parent");
                    graph.commit_mut(p).tailed = true;
                } else if parent.is_some() {
                    nlive += 1;
                }
                commits[k] = parent;
            } else {
                let c = graph.commit(cid);
                if c.parent.is_some() || !c.files.is_empty() {
                    nlive += 1;
                }
            }
        }
    }

    // Link the built chain: newest-first, each pointing to the next-older.
    for w in 1..built.len() {
        graph.commit_mut(built[w - 1]).parent = Some(built[w]);
    }

    date_sort_and_trim(graph, &mut commits);
    attach_to_parent(graph, config, out, head_idx, &branch_name, &commits, &mut built, diagnostics)?;

    // Clear the scratch `tailed` flag on whatever is left in the residual.
    for &cid in commits.iter().flatten() {
        graph.commit_mut(cid).tailed = false;
    }

    out.heads[head_idx].commit = built.first().copied();
    Ok(())
}

/// Locate this branch's attachment point in its parent branch and splice
/// `built`'s last (oldest) commit onto it, with graceful fallback and
/// diagnostics on failure.
fn attach_to_parent(
    graph: &mut RevGraph,
    config: &MergeConfig,
    out: &RevList,
    head_idx: usize,
    branch_name: &str,
    commits: &[Option<CommitId>],
    built: &mut Vec<CommitId>,
    diagnostics: &mut Diagnostics,
) -> Result<(), MergeError> {
    let Some(parent_idx) = out.heads[head_idx].parent else {
        return Ok(());
    };
    if commits.is_empty() {
        return Ok(());
    }

    let residual: Vec<CommitId> = commits.iter().map(|c| c.expect("trimmed to all-Some")).collect();
    let Some(present) = residual.iter().position(|&cid| !graph.commit(cid).files.is_empty()) else {
        return Ok(());
    };
    let target = residual[present];
    let parent_name = out.heads[parent_idx].name.as_str().to_owned();

    let attach = locate::locate_one(graph, config, out, Some(parent_idx), target);
    let (attach, matched_by_date) = match attach {
        Some(id) => (Some(id), false),
        None => {
            let date = graph.commit(target).date;
            match locate::locate_by_date(graph, out, parent_idx, date) {
                Some(id) => (Some(id), true),
                None => (None, false),
            }
        }
    };

    match attach {
        Some(attach_id) => {
            if matched_by_date {
                diagnostics.push(Diagnostic::BranchPointMatchedByDate {
                    child: branch_name.to_owned(),
                    parent: parent_name,
                });
            } else if let Some(&last) = built.last() {
                if graph.commit(attach_id).date > graph.commit(last).date {
                    diagnostics.push(Diagnostic::BranchPointLaterThanBranch {
                        child: branch_name.to_owned(),
                        parent: parent_name,
                    });
                }
            }
            if let Some(&last) = built.last() {
                graph.commit_mut(last).tail = true;
                graph.commit_mut(last).parent = Some(attach_id);
            } else {
                // Nothing of this branch's own was built; its head commit
                // is simply the parent's commit (a degenerate branch, per
                // `model::RevRef::tail` — the tail marker will detect it).
                built.push(attach_id);
            }
        }
        None => {
            let possible_match = locate::branch_of_commit(graph, config, out, target).map(|idx| out.heads[idx].name.as_str().to_owned());
            diagnostics.push(Diagnostic::BranchPointNotFound {
                child: branch_name.to_owned(),
                parent: parent_name,
                possible_match,
            });
            let synth = build_commit(graph, &residual, branch_name)?;
            if let Some(&last) = built.last() {
                graph.commit_mut(last).parent = Some(synth);
            } else {
                built.push(synth);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RevRef, RevisionNumber, Symbol, Timestamp};

    /// Build a single-file input chain (newest first) as a `RevList` with
    /// one head "trunk", returning the `RevList` plus its head commit id.
    fn chain(graph: &mut RevGraph, file: &str, log: &str, dates: &[i64]) -> RevList {
        let mut parent = None;
        let mut head_commit = None;
        for &date in dates.iter().rev() {
            let f = graph.file_rev(Symbol::new(file), RevisionNumber::new([1, 1]), Timestamp::from(date));
            let c = graph.add_commit(Commit {
                date: Timestamp::from(date),
                commit_id: None,
                log: Symbol::new(log),
                files: vec![f],
                parent,
                tail: false,
                tailed: false,
                seen: 0,
                tagged: false,
            });
            parent = Some(c);
            head_commit = Some(c);
        }
        let mut rl = RevList::new();
        rl.add_head(RevRef::new_head(Symbol::new("trunk"), head_commit, 1));
        rl
    }

    #[test]
    fn single_file_single_branch_merges_straight_through() {
        // One file, three commits, same log.
        let mut graph = RevGraph::new();
        let input = chain(&mut graph, "a.c", "l", &[300, 200, 100]);
        let mut out = RevList::new();
        out.add_head(RevRef::new_head(Symbol::new("trunk"), None, 1));
        let mut diagnostics = Diagnostics::new();
        let config = MergeConfig::default();

        merge_one(&mut graph, &config, &[input], &mut out, 0, &mut diagnostics).unwrap();

        let mut dates = Vec::new();
        let mut c = out.heads[0].commit;
        while let Some(cid) = c {
            let commit = graph.commit(cid);
            assert_eq!(commit.nfiles(), 1);
            dates.push(commit.date.unix_seconds());
            c = commit.parent;
        }
        assert_eq!(dates, vec![300, 200, 100]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn matching_logs_across_two_files_coalesce_into_one_commit() {
        // Two files, same log handle, dates within the coalescing window.
        let mut graph = RevGraph::new();
        let log = Symbol::new("L");
        let mut a_parent = None;
        let mut a_head = None;
        for &date in &[300, 200, 100] {
            let f = graph.file_rev(Symbol::new("a.c"), RevisionNumber::new([1, 1]), Timestamp::from(date));
            let c = graph.add_commit(Commit {
                date: Timestamp::from(date),
                commit_id: None,
                log: log.clone(),
                files: vec![f],
                parent: a_parent,
                tail: false,
                tailed: false,
                seen: 0,
                tagged: false,
            });
            a_parent = Some(c);
            a_head = Some(c);
        }
        let mut b_parent = None;
        let mut b_head = None;
        for &date in &[305, 195, 95] {
            let f = graph.file_rev(Symbol::new("b.c"), RevisionNumber::new([1, 1]), Timestamp::from(date));
            let c = graph.add_commit(Commit {
                date: Timestamp::from(date),
                commit_id: None,
                log: log.clone(),
                files: vec![f],
                parent: b_parent,
                tail: false,
                tailed: false,
                seen: 0,
                tagged: false,
            });
            b_parent = Some(c);
            b_head = Some(c);
        }
        let mut input_a = RevList::new();
        input_a.add_head(RevRef::new_head(Symbol::new("trunk"), a_head, 1));
        let mut input_b = RevList::new();
        input_b.add_head(RevRef::new_head(Symbol::new("trunk"), b_head, 1));

        let mut out = RevList::new();
        out.add_head(RevRef::new_head(Symbol::new("trunk"), None, 1));
        let mut diagnostics = Diagnostics::new();
        let config = MergeConfig::default();

        merge_one(&mut graph, &config, &[input_a, input_b], &mut out, 0, &mut diagnostics).unwrap();

        let mut commits = Vec::new();
        let mut c = out.heads[0].commit;
        while let Some(cid) = c {
            commits.push(cid);
            c = graph.commit(cid).parent;
        }
        assert_eq!(commits.len(), 3, "three logical commits, each with both files");
        for &cid in &commits {
            assert_eq!(graph.commit(cid).nfiles(), 2);
        }
        assert_eq!(graph.commit(commits[0]).date.unix_seconds(), 305);
    }

    #[test]
    fn mismatched_logs_never_coalesce() {
        // Same dates/window as the two-file case above, but file B uses a
        // different log, so every per-file commit stays its own whole-tree
        // commit.
        let mut graph = RevGraph::new();
        let mut a_parent = None;
        let mut a_head = None;
        for &date in &[300, 200, 100] {
            let f = graph.file_rev(Symbol::new("a.c"), RevisionNumber::new([1, 1]), Timestamp::from(date));
            let c = graph.add_commit(Commit {
                date: Timestamp::from(date),
                commit_id: None,
                log: Symbol::new("L"),
                files: vec![f],
                parent: a_parent,
                tail: false,
                tailed: false,
                seen: 0,
                tagged: false,
            });
            a_parent = Some(c);
            a_head = Some(c);
        }
        let mut b_parent = None;
        let mut b_head = None;
        for &date in &[305, 195, 95] {
            let f = graph.file_rev(Symbol::new("b.c"), RevisionNumber::new([1, 1]), Timestamp::from(date));
            let c = graph.add_commit(Commit {
                date: Timestamp::from(date),
                commit_id: None,
                log: Symbol::new("M"),
                files: vec![f],
                parent: b_parent,
                tail: false,
                tailed: false,
                seen: 0,
                tagged: false,
            });
            b_parent = Some(c);
            b_head = Some(c);
        }
        let mut input_a = RevList::new();
        input_a.add_head(RevRef::new_head(Symbol::new("trunk"), a_head, 1));
        let mut input_b = RevList::new();
        input_b.add_head(RevRef::new_head(Symbol::new("trunk"), b_head, 1));

        let mut out = RevList::new();
        out.add_head(RevRef::new_head(Symbol::new("trunk"), None, 1));
        let mut diagnostics = Diagnostics::new();
        let config = MergeConfig::default();

        merge_one(&mut graph, &config, &[input_a, input_b], &mut out, 0, &mut diagnostics).unwrap();

        let mut commits = Vec::new();
        let mut c = out.heads[0].commit;
        while let Some(cid) = c {
            commits.push(cid);
            c = graph.commit(cid).parent;
        }
        assert_eq!(commits.len(), 6, "no coalescing: six single-file commits");
        for &cid in &commits {
            assert_eq!(graph.commit(cid).nfiles(), 1);
        }
    }
}
