//! Ref aggregation & degree sort.
//!
//! Unions head and tag names across every input [`RevList`], keeping the
//! maximum observed degree per name, then orders the result ascending by
//! degree so shallower (trunk-like) branches are processed before their
//! descendants in every later pipeline stage.

use crate::model::{RevList, RevRef};

/// Union head and tag names across `inputs` into a fresh output [`RevList`].
///
/// For each name, keeps the larger of the degrees seen across inputs —
/// including tags, where taking the max degree gives a more useful
/// placement hint than just keeping whichever value was seen first.
#[must_use]
pub(crate) fn merge_ref_names(inputs: &[RevList]) -> RevList {
    let mut out = RevList::new();
    for input in inputs {
        for h in &input.heads {
            match out.find_head(&h.name) {
                Some(idx) => {
                    if h.degree > out.heads[idx].degree {
                        out.heads[idx].degree = h.degree;
                    }
                }
                None => {
                    out.add_head(RevRef::new_head(h.name.clone(), None, h.degree));
                }
            }
        }
        for t in &input.tags {
            match out.find_tag(&t.name) {
                Some(idx) => {
                    if t.degree > out.tags[idx].degree {
                        out.tags[idx].degree = t.degree;
                    }
                }
                None => {
                    out.add_tag(RevRef::new_tag(t.name.clone(), None, t.degree));
                }
            }
        }
    }
    out
}

/// Stable sort ascending by `degree`. `Vec::sort_by_key` is already a
/// stable sort, so this is the whole implementation; ties preserve
/// discovery order.
pub(crate) fn sort_by_degree(refs: &mut [RevRef]) {
    refs.sort_by_key(|r| r.degree);
}
