//! Deduplication and deterministic ordering of generated candidates.

use crate::Candidate;

/// Sorts and deduplicates candidates into their canonical order.
///
/// Candidates compare segment by segment on `(code, expansion)`, so the
/// output is independent of the order candidates were produced in.
///
/// # Examples
///
/// ```
/// use shell_aliases_core::{Candidate, Segment, finalize};
///
/// let k = Segment::new("k", "kubectl");
/// let kg = Candidate(vec![k.clone(), Segment::new("g", "get")]);
/// let ka = Candidate(vec![k.clone(), Segment::new("a", "apply")]);
///
/// let out = finalize(vec![kg.clone(), ka.clone(), kg.clone()]);
/// assert_eq!(out, vec![ka, kg]);
/// ```
pub fn finalize<I>(candidates: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut ordered: Vec<Candidate> = candidates.into_iter().collect();
    ordered.sort_unstable();
    ordered.dedup();
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Segment;

    fn candidate(parts: &[(&str, &str)]) -> Candidate {
        Candidate(
            parts
                .iter()
                .map(|(code, expansion)| Segment::new(code, expansion))
                .collect(),
        )
    }

    #[test]
    fn test_finalize_orders_prefix_before_extension() {
        let out = finalize(vec![
            candidate(&[("k", "kubectl"), ("g", "get"), ("po", "pods")]),
            candidate(&[("k", "kubectl"), ("g", "get")]),
            candidate(&[("k", "kubectl")]),
        ]);
        let keys: Vec<String> = out.iter().map(Candidate::key).collect();
        assert_eq!(keys, vec!["k", "kg", "kgpo"]);
    }

    #[test]
    fn test_finalize_breaks_code_ties_on_expansion() {
        let out = finalize(vec![
            candidate(&[("k", "kubectl"), ("w", "--watch")]),
            candidate(&[("k", "kubectl"), ("w", "--wait=true")]),
        ]);
        assert_eq!(out[0].expansion(), "kubectl --wait=true");
        assert_eq!(out[1].expansion(), "kubectl --watch");
    }

    #[test]
    fn test_finalize_compares_codes_not_keys() {
        // "kgpo" sorts before "kga" once split into segments: "g" < "ga"
        let out = finalize(vec![
            candidate(&[("k", "kubectl"), ("ga", "get all")]),
            candidate(&[("k", "kubectl"), ("g", "get"), ("po", "pods")]),
        ]);
        assert_eq!(out[0].key(), "kgpo");
    }

    #[test]
    fn test_finalize_is_order_independent() {
        let a = candidate(&[("k", "kubectl"), ("a", "apply")]);
        let b = candidate(&[("k", "kubectl"), ("lo", "logs")]);
        let c = candidate(&[("k", "kubectl")]);
        assert_eq!(
            finalize(vec![a.clone(), b.clone(), c.clone()]),
            finalize(vec![b, c, a])
        );
    }

    #[test]
    fn test_finalize_empty() {
        assert!(finalize(Vec::new()).is_empty());
    }
}
