//! Rendering candidates as shell alias definitions.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Candidate;

/// A single alias definition: the concatenated codes and the expanded
/// command line.
///
/// # Examples
///
/// ```
/// use shell_aliases_core::{AliasLine, Candidate, Segment};
///
/// let candidate = Candidate(vec![Segment::new("k", "kubectl"), Segment::new("g", "get")]);
/// let line = AliasLine::from(&candidate);
/// assert_eq!(line.to_string(), "alias kg='kubectl get'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasLine {
    pub key: String,
    pub value: String,
}

impl From<&Candidate> for AliasLine {
    fn from(candidate: &Candidate) -> Self {
        Self {
            key: candidate.key(),
            value: candidate.expansion(),
        }
    }
}

impl fmt::Display for AliasLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Inside '...' a literal quote has to be written as '\''.
        write!(f, "alias {}='{}'", self.key, self.value.replace('\'', r"'\''"))
    }
}

/// Renders candidates in their given order.
pub fn render_aliases(candidates: &[Candidate]) -> Vec<AliasLine> {
    candidates.iter().map(AliasLine::from).collect()
}

/// Returns alias keys defined more than once, sorted.
///
/// Distinct candidates can concatenate to the same key (e.g. "g"+"po" and
/// "gp"+"o"); a shell keeps only the last definition.
pub fn find_key_collisions(lines: &[AliasLine]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for line in lines {
        *counts.entry(line.key.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| key.to_string())
        .collect()
}
