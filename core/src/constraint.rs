//! Prefix-relative constraint checking.
//!
//! A segment's rules only inspect segments placed strictly before it. A
//! sequence is valid when every segment is admitted by its own prefix, which
//! makes validity depend on order, not just membership.
//!
//! # Examples
//!
//! ```
//! use shell_aliases_core::{Segment, is_valid};
//!
//! let k = Segment::new("k", "kubectl");
//! let g = Segment::new("g", "get");
//! let po = Segment::new("po", "pods").requires(["g"]);
//!
//! assert!(is_valid(&[k.clone(), g.clone(), po.clone()]));
//! assert!(!is_valid(&[k.clone(), po.clone(), g.clone()]));
//! ```

use crate::Segment;

/// Returns `true` if `segment` may follow `prefix`.
///
/// The requirement check passes when `requires_one_of` is empty or one of
/// its codes occurs in `prefix`. The incompatibility check fails when any
/// code of `incompatible_with` occurs in `prefix`.
pub fn admits(prefix: &[Segment], segment: &Segment) -> bool {
    if !segment.requires_one_of.is_empty()
        && !prefix
            .iter()
            .any(|earlier| segment.requires_one_of.contains(&earlier.code))
    {
        return false;
    }

    !prefix
        .iter()
        .any(|earlier| segment.incompatible_with.contains(&earlier.code))
}

/// Returns `true` if every segment in `sequence` is admitted by the
/// segments before it.
pub fn is_valid(sequence: &[Segment]) -> bool {
    sequence
        .iter()
        .enumerate()
        .all(|(i, segment)| admits(&sequence[..i], segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(code: &str) -> Segment {
        Segment::new(code, code)
    }

    #[test]
    fn test_empty_sequence_is_valid() {
        assert!(is_valid(&[]));
    }

    #[test]
    fn test_requirement_needs_earlier_code() {
        let po = seg("po").requires(["g", "des"]);
        assert!(is_valid(&[seg("k"), seg("des"), po.clone()]));
        assert!(!is_valid(&[seg("k"), po.clone()]));
        assert!(!is_valid(&[seg("k"), po, seg("g")]));
    }

    #[test]
    fn test_requirement_does_not_see_itself() {
        let g = seg("g").requires(["g"]);
        assert!(!is_valid(&[seg("k"), g]));
    }

    #[test]
    fn test_incompatibility_only_looks_backwards() {
        let oy = seg("oy");
        let sl = seg("sl").incompatible(["oy"]);

        assert!(!is_valid(&[seg("k"), oy.clone(), sl.clone()]));
        assert!(is_valid(&[seg("k"), sl, oy]));
    }

    #[test]
    fn test_both_rules_apply_together() {
        let ow = seg("ow").requires(["g"]).incompatible(["oy"]);
        assert!(is_valid(&[seg("g"), ow.clone()]));
        assert!(!is_valid(&[seg("g"), seg("oy"), ow.clone()]));
        assert!(!is_valid(&[seg("oy"), ow]));
    }

    #[test]
    fn test_admits_matches_full_check() {
        let prefix = vec![seg("k"), seg("g")];
        let w = seg("w").requires(["g"]).incompatible(["oy", "ow"]);
        assert!(admits(&prefix, &w));

        let mut sequence = prefix.clone();
        sequence.push(w);
        assert!(is_valid(&sequence));
    }
}
