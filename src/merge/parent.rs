//! Parent resolution, plus a supplemental collision check.
//!
//! The primary algorithm (`resolve_parents`) looks, for each aggregated
//! head, at every input that names it, resolves that input's parent
//! recursively, and keeps whichever candidate parent has the greatest
//! `depth`. `detect_branch_collisions` is a second, diagnostic-only pass:
//! it flags the case where two inputs disagree about a head's parent
//! branch and neither candidate is an ancestor of the other, without
//! disturbing the depth-based resolution `resolve_parents` already
//! computed.

use std::collections::HashSet;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::MergeError;
use crate::model::{RevList, Symbol};

/// Resolve `parent` and `depth` for every head in `out`, examining every
/// input `RevList` that names it.
///
/// # Errors
/// Returns [`MergeError::ReferenceMissingInMerge`] if an input names a
/// parent branch that ref aggregation did not carry into `out` — this
/// means aggregation missed a name, a bug in this crate rather than in the
/// caller's input.
pub(crate) fn resolve_parents(inputs: &[RevList], out: &mut RevList) -> Result<(), MergeError> {
    let n = out.heads.len();
    let mut visiting = HashSet::new();
    for idx in 0..n {
        resolve_one(inputs, out, idx, &mut visiting)?;
    }
    Ok(())
}

fn resolve_one(
    inputs: &[RevList],
    out: &mut RevList,
    idx: usize,
    visiting: &mut HashSet<usize>,
) -> Result<(), MergeError> {
    if out.heads[idx].is_resolved() {
        return Ok(());
    }
    // Cycle guard: a well-formed input never revisits an in-progress head,
    // but this tolerates a malformed one that would otherwise recurse
    // forever.
    if !visiting.insert(idx) {
        return Ok(());
    }

    let name = out.heads[idx].name.clone();
    let mut best: Option<(usize, i32)> = None;
    for input in inputs {
        let Some(sh_idx) = input.find_head(&name) else {
            continue;
        };
        let Some(sp_idx) = input.heads[sh_idx].parent else {
            continue;
        };
        let parent_name = input.heads[sp_idx].name.clone();
        let p_idx = out
            .find_head(&parent_name)
            .ok_or_else(|| MergeError::reference_missing(&parent_name))?;
        if p_idx != idx {
            resolve_one(inputs, out, p_idx, visiting)?;
        }
        let p_depth = out.heads[p_idx].depth;
        if best.is_none_or(|(_, best_depth)| p_depth > best_depth) {
            best = Some((p_idx, p_depth));
        }
    }

    match best {
        Some((p_idx, p_depth)) => {
            out.heads[idx].parent = Some(p_idx);
            out.heads[idx].depth = p_depth + 1;
        }
        None => {
            out.heads[idx].depth = 1;
        }
    }
    visiting.remove(&idx);
    Ok(())
}

/// Walk from `young`'s head (by name) up the already-resolved parent chain
/// in `out`, looking for `old`.
fn is_ancestor_by_name(out: &RevList, old: &Symbol, young: &Symbol) -> bool {
    let mut idx = out.find_head(young);
    while let Some(i) = idx {
        if &out.heads[i].name == old {
            return true;
        }
        idx = out.heads[i].parent;
    }
    false
}

/// Supplemental diagnostic pass (see module docs): for each output head,
/// compare every input's claimed parent name. Two different candidate names
/// where neither is an ancestor of the other is reported as a
/// `BranchNameCollision`. Must run after [`resolve_parents`] since it walks
/// `out`'s resolved parent chains.
pub(crate) fn detect_branch_collisions(inputs: &[RevList], out: &RevList, diagnostics: &mut Diagnostics) {
    for head in &out.heads {
        let name = &head.name;
        let mut chosen: Option<Symbol> = None;
        for input in inputs {
            let Some(sh_idx) = input.find_head(name) else {
                continue;
            };
            let Some(sp_idx) = input.heads[sh_idx].parent else {
                continue;
            };
            let candidate = input.heads[sp_idx].name.clone();
            match &chosen {
                None => chosen = Some(candidate),
                Some(current) if *current == candidate => {}
                Some(current) => {
                    if is_ancestor_by_name(out, &candidate, current) {
                        // current is younger; keep it
                    } else if is_ancestor_by_name(out, current, &candidate) {
                        chosen = Some(candidate);
                    } else {
                        diagnostics.push(Diagnostic::BranchNameCollision {
                            first: current.as_str().to_owned(),
                            second: candidate.as_str().to_owned(),
                        });
                    }
                }
            }
        }
    }
}
