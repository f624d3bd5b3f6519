//! The merge pipeline: one module per stage, mirroring how `maw-core`
//! splits its own merge pipeline (`merge/build.rs`, `merge/partition.rs`,
//! `merge/plan.rs`, ...) into one file per step so each can be
//! unit-tested in isolation.
//!
//! [`crate::list_merge`] drives these in a fixed order: aggregate → sort →
//! resolve parents → merge each branch (ascending degree) → mark tails →
//! place tags → validate.

pub(crate) mod aggregate;
pub(crate) mod branch;
pub(crate) mod commit_match;
pub(crate) mod locate;
pub(crate) mod order;
pub(crate) mod parent;
pub(crate) mod tag;
pub(crate) mod tail;
pub(crate) mod validate;
