//! Tag placement: find the newest per-input commit for this tag name,
//! locate the merged branch it lives on, then locate the corresponding
//! merged commit on that branch (falling back across every branch from the
//! root if needed), and finally synthesize a terminal commit if nothing
//! matches at all.

use crate::config::MergeConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::MergeError;
use crate::model::{CommitId, RevGraph, RevList};

use super::branch::build_commit;
use super::locate;
use super::order::date_sort_and_trim;

/// Place every aggregated tag onto the merged graph. Must run after
/// [`super::branch::merge_one`] has merged every head, since tag placement
/// scans the merged branch chains.
///
/// # Errors
/// Propagates [`MergeError::DuplicateFileInCommit`] from [`build_commit`]
/// when a tag's fallback synthesis collides on a file.
pub(crate) fn place_all(
    graph: &mut RevGraph,
    config: &MergeConfig,
    inputs: &[RevList],
    out: &mut RevList,
    diagnostics: &mut Diagnostics,
) -> Result<(), MergeError> {
    for idx in 0..out.tags.len() {
        place_one(graph, config, inputs, out, idx, diagnostics)?;
    }
    Ok(())
}

fn place_one(
    graph: &mut RevGraph,
    config: &MergeConfig,
    inputs: &[RevList],
    out: &mut RevList,
    tag_idx: usize,
    diagnostics: &mut Diagnostics,
) -> Result<(), MergeError> {
    let name = out.tags[tag_idx].name.clone();

    let mut commits: Vec<Option<CommitId>> = Vec::new();
    for input in inputs {
        if let Some(idx) = input.find_tag(&name) {
            commits.push(input.tags[idx].commit);
        }
    }
    date_sort_and_trim(graph, &mut commits);

    if commits.is_empty() {
        diagnostics.push(Diagnostic::LostTag {
            name: name.as_str().to_owned(),
        });
        return Ok(());
    }

    let residual: Vec<CommitId> = commits.into_iter().map(|c| c.expect("trimmed to all-Some")).collect();
    let newest = residual[0];

    let parent_idx = locate::branch_of_commit(graph, config, out, newest);
    out.tags[tag_idx].parent = parent_idx;

    let placed = parent_idx.and_then(|p| locate::locate(graph, config, out, p, newest));
    let placed = match placed {
        Some(c) => c,
        None => build_commit(graph, &residual, name.as_str())?,
    };

    out.tags[tag_idx].commit = Some(placed);
    graph.commit_mut(placed).tagged = true;
    Ok(())
}
