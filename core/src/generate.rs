//! Combination generation over an ordered catalog.
//!
//! Groups are processed in declaration order. Each pass extends every
//! accumulated candidate with every admissible selection from the group and
//! replaces the accumulation with the result.
//!
//! Validity is prefix-closed (a segment only inspects what precedes it), so
//! a selection is built one segment at a time and abandoned as soon as the
//! newest segment is rejected. The resulting set is identical to validating
//! every full concatenation of [`selections`] output, without materializing
//! the permutations that could never pass.
//!
//! # Examples
//!
//! ```
//! use shell_aliases_core::*;
//!
//! let catalog = Catalog::new(vec![
//!     SegmentGroup::mandatory_one("cmds", vec![Segment::new("k", "kubectl")]),
//!     SegmentGroup::optional_one("ops", vec![Segment::new("g", "get")]),
//!     SegmentGroup::optional_one("res", vec![Segment::new("po", "pods").requires(["g"])]),
//! ]);
//!
//! let keys: Vec<String> = finalize(generate(&catalog)).iter().map(|c| c.key()).collect();
//! assert_eq!(keys, vec!["k", "kg", "kgpo"]);
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::constraint::admits;
use crate::{Candidate, Catalog, Segment, SegmentGroup};

/// Unordered set of candidates produced by [`generate`].
pub type CandidateSet = HashSet<Candidate>;

/// Enumerates every valid candidate sequence for `catalog`.
///
/// Never fails. A mandatory group with no segments yields an empty set.
pub fn generate(catalog: &Catalog) -> CandidateSet {
    let mut accumulated = CandidateSet::new();
    accumulated.insert(Candidate::default());

    for group in &catalog.groups {
        let mut next = CandidateSet::new();
        for prefix in &accumulated {
            extend_with_group(prefix, group, &mut next);
        }
        debug!(
            group = %group.name,
            segments = group.segments.len(),
            before = accumulated.len(),
            after = next.len(),
            "expanded group"
        );
        accumulated = next;
    }

    accumulated.retain(|candidate| !candidate.is_empty());
    accumulated
}

/// Lists every selection a group can contribute, before validation.
///
/// Take-exactly-one groups yield each segment alone. Other groups yield
/// every subset of size one or more. Optional groups also yield the empty
/// selection, and every subset is expanded into all of its orderings.
///
/// # Examples
///
/// ```
/// use shell_aliases_core::{Segment, SegmentGroup, selections};
///
/// let group = SegmentGroup::optional_any(
///     "args",
///     vec![Segment::new("a", "-a"), Segment::new("b", "-b")],
/// );
/// // [], [a], [b], [a, b], [b, a]
/// assert_eq!(selections(&group).len(), 5);
/// ```
pub fn selections(group: &SegmentGroup) -> Vec<Vec<&Segment>> {
    let mut out = Vec::new();
    let mut used = vec![false; group.segments.len()];
    let mut current = Vec::new();
    collect_selections(group, &mut used, &mut current, None, &mut out);
    out
}

fn collect_selections<'a>(
    group: &'a SegmentGroup,
    used: &mut [bool],
    current: &mut Vec<&'a Segment>,
    last: Option<usize>,
    out: &mut Vec<Vec<&'a Segment>>,
) {
    if current.len() >= min_selection(group) {
        out.push(current.clone());
    }
    if current.len() == max_selection(group) {
        return;
    }

    for index in next_indices(group, used, last) {
        used[index] = true;
        current.push(&group.segments[index]);
        collect_selections(group, used, current, Some(index), out);
        current.pop();
        used[index] = false;
    }
}

fn extend_with_group(prefix: &Candidate, group: &SegmentGroup, out: &mut CandidateSet) {
    let mut used = vec![false; group.segments.len()];
    let mut sequence = prefix.segments().to_vec();
    extend_recursive(group, &mut used, &mut sequence, prefix.len(), None, out);
}

fn extend_recursive(
    group: &SegmentGroup,
    used: &mut [bool],
    sequence: &mut Vec<Segment>,
    prefix_len: usize,
    last: Option<usize>,
    out: &mut CandidateSet,
) {
    let taken = sequence.len() - prefix_len;
    if taken >= min_selection(group) {
        out.insert(Candidate(sequence.clone()));
    }
    if taken == max_selection(group) {
        return;
    }

    for index in next_indices(group, used, last) {
        let segment = &group.segments[index];
        if !admits(sequence, segment) {
            continue;
        }
        used[index] = true;
        sequence.push(segment.clone());
        extend_recursive(group, used, sequence, prefix_len, Some(index), out);
        sequence.pop();
        used[index] = false;
    }
}

fn min_selection(group: &SegmentGroup) -> usize {
    if group.optional { 0 } else { 1 }
}

fn max_selection(group: &SegmentGroup) -> usize {
    if group.take_exactly_one {
        group.segments.len().min(1)
    } else {
        group.segments.len()
    }
}

/// Indices that may extend the current selection: any unused segment for
/// reorderable groups, otherwise only segments declared after the last one.
fn next_indices(group: &SegmentGroup, used: &[bool], last: Option<usize>) -> Vec<usize> {
    let start = match (group.is_reorderable(), last) {
        (false, Some(index)) => index + 1,
        _ => 0,
    };
    (start..group.segments.len())
        .filter(|&index| !used[index])
        .collect()
}
