//! `revgraph-core` — reconstructs a branch-and-tag revision graph from
//! multiple per-file revision histories into a single unified
//! repository-wide history.
//!
//! This crate implements only the **merge core**: given a collection of
//! per-file [`RevList`]s — each with its own heads, tags, and linear
//! per-file commit chains — [`list_merge`] synthesizes a single `RevList`
//! whose heads are whole-tree commits with proper parent pointers, whose
//! branches form a coherent forest, and whose tags are placed on that
//! forest.
//!
//! Parsing an on-disk file-history format into per-file `RevList`s,
//! rendering the merged result into a target VCS, and CLI argument handling
//! are all out of scope — those are external collaborators.
//!
//! # Example
//!
//! ```
//! use revgraph_core::config::MergeConfig;
//! use revgraph_core::model::{Commit, RevGraph, RevList, RevRef, RevisionNumber, Symbol, Timestamp};
//!
//! let mut graph = RevGraph::new();
//! let f = graph.file_rev(Symbol::new("file.c"), RevisionNumber::new([1, 1]), Timestamp::from(100));
//! let commit = graph.add_commit(Commit {
//!     date: Timestamp::from(100),
//!     commit_id: None,
//!     log: Symbol::new("initial import"),
//!     files: vec![f],
//!     parent: None,
//!     tail: false,
//!     tailed: false,
//!     seen: 0,
//!     tagged: false,
//! });
//! let mut input = RevList::new();
//! input.add_head(RevRef::new_head(Symbol::new("trunk"), Some(commit), 1));
//!
//! let (merged, diagnostics) = revgraph_core::list_merge(&mut graph, &MergeConfig::default(), &[input]).unwrap();
//! assert_eq!(merged.heads.len(), 1);
//! assert!(diagnostics.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod diagnostics;
pub mod error;
mod merge;
pub mod model;

use tracing::{debug, instrument};

use config::MergeConfig;
use diagnostics::Diagnostics;
use error::MergeError;
use model::{RevGraph, RevList, RevRef, RevisionNumber, Symbol, Timestamp};

/// The crate's sole entry point: fold `inputs` — one [`RevList`] per input
/// file's already-parsed history, all allocated in `graph` — into a single
/// repository-wide `RevList` plus whatever soft [`Diagnostics`] the merge
/// produced along the way.
///
/// Runs a fixed seven-stage pipeline: ref aggregation, degree sort, parent
/// resolution, branch merge (ascending degree), tail marking, tag
/// placement, and validation.
///
/// # Errors
/// Returns [`MergeError`] on a structural mismatch in `inputs` — a parent
/// name ref aggregation failed to carry into the merged heads, or a merged
/// commit ending up with a duplicate `FileRev`.
#[instrument(skip(graph, inputs), fields(inputs = inputs.len()))]
pub fn list_merge(graph: &mut RevGraph, config: &MergeConfig, inputs: &[RevList]) -> Result<(RevList, Diagnostics), MergeError> {
    let mut diagnostics = Diagnostics::new();

    debug!("aggregating ref names across {} inputs", inputs.len());
    let mut out = merge::aggregate::merge_ref_names(inputs);
    merge::aggregate::sort_by_degree(&mut out.heads);
    merge::aggregate::sort_by_degree(&mut out.tags);

    debug!(heads = out.heads.len(), "resolving branch parents");
    merge::parent::resolve_parents(inputs, &mut out)?;
    merge::parent::detect_branch_collisions(inputs, &out, &mut diagnostics);

    debug!("merging branches in ascending-degree order");
    for idx in 0..out.heads.len() {
        merge::branch::merge_one(graph, config, inputs, &mut out, idx, &mut diagnostics)?;
    }

    debug!("marking tail commits");
    merge::tail::set_tail(graph, &mut out);

    debug!(tags = out.tags.len(), "placing tags");
    merge::tag::place_all(graph, config, inputs, &mut out, &mut diagnostics)?;

    merge::validate::validate(graph, &out);

    Ok((out, diagnostics))
}

/// Construct a new file revision — the crate's `file_rev` external entry
/// point, used by upstream parsing collaborators. Thin wrapper over
/// [`RevGraph::file_rev`], kept at crate root for callers that don't want
/// to reach through a `RevGraph` for a one-off construction.
pub fn file_rev(graph: &mut RevGraph, name: Symbol, number: RevisionNumber, date: Timestamp) -> model::FileRevId {
    graph.file_rev(name, number, date)
}

/// Drop a single head (and, transitively through its commit chain, whatever
/// that chain owns). Kept as an explicit, named lifecycle function for
/// callers migrating off a manual free model; with everything arena-owned
/// this is just `drop` — `free_files` is accepted for signature
/// compatibility but has no observable effect, since arena-owned `FileRev`s
/// are not independently shared-and-refcounted.
pub fn head_free(head: RevRef, free_files: bool) {
    let _ = free_files;
    drop(head);
}

/// Drop an entire merged `RevList`. See [`head_free`].
pub fn list_free(list: RevList, free_files: bool) {
    let _ = free_files;
    drop(list);
}
