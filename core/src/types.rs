//! Catalog type definitions for alias segment modeling.
//!
//! A [`Catalog`] is an ordered list of [`SegmentGroup`]s. Each group holds
//! [`Segment`]s that contribute a short code to the alias key and an
//! expansion to the alias value. The types serialize with [`serde`] so a
//! catalog can be authored as YAML or JSON.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A codeable unit of command text with optional co-occurrence rules.
///
/// Rules reference other segments by `code`, never by group. The derived
/// ordering compares `code` first, then `expansion`, which is the ordering
/// [`finalize`](crate::finalize) relies on.
///
/// # Examples
///
/// ```
/// use shell_aliases_core::Segment;
///
/// let pods = Segment::new("po", "pods").requires(["g", "des", "del"]);
/// assert_eq!(pods.code, "po");
/// assert!(pods.requires_one_of.contains("g"));
/// assert!(pods.incompatible_with.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Short alias token (e.g. "po").
    pub code: String,
    /// Literal text contributed to the command line (e.g. "pods").
    pub expansion: String,
    /// At least one of these codes must appear earlier in the sequence.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub requires_one_of: BTreeSet<String>,
    /// None of these codes may appear earlier in the sequence.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub incompatible_with: BTreeSet<String>,
}

impl Segment {
    /// Creates a segment with no rules.
    pub fn new(code: &str, expansion: &str) -> Self {
        Self {
            code: code.to_string(),
            expansion: expansion.to_string(),
            requires_one_of: BTreeSet::new(),
            incompatible_with: BTreeSet::new(),
        }
    }

    /// Adds codes to the "requires one of" set.
    pub fn requires<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires_one_of.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Adds codes to the "incompatible with" set.
    pub fn incompatible<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.incompatible_with
            .extend(codes.into_iter().map(Into::into));
        self
    }
}

/// An ordered collection of alternative segments with a cardinality policy.
///
/// `optional` groups may contribute nothing and have their selections
/// explored in every relative order. `take_exactly_one` groups contribute
/// at most one segment.
///
/// # Examples
///
/// ```
/// use shell_aliases_core::{Segment, SegmentGroup};
///
/// let base = SegmentGroup::mandatory_one("cmds", vec![Segment::new("k", "kubectl")]);
/// assert!(!base.optional);
/// assert!(base.take_exactly_one);
///
/// let flags = SegmentGroup::optional_any("args", vec![Segment::new("oy", "-o=yaml")]);
/// assert!(flags.optional);
/// assert!(!flags.take_exactly_one);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentGroup {
    /// Group name, used in diagnostics only.
    pub name: String,
    /// May the group contribute zero segments.
    pub optional: bool,
    /// Does the group contribute at most one segment.
    pub take_exactly_one: bool,
    /// Segments in declaration order.
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl SegmentGroup {
    pub fn new(name: &str, optional: bool, take_exactly_one: bool, segments: Vec<Segment>) -> Self {
        Self {
            name: name.to_string(),
            optional,
            take_exactly_one,
            segments,
        }
    }

    /// A mandatory group contributing exactly one segment (the base command).
    pub fn mandatory_one(name: &str, segments: Vec<Segment>) -> Self {
        Self::new(name, false, true, segments)
    }

    /// An optional group contributing zero or one segment.
    pub fn optional_one(name: &str, segments: Vec<Segment>) -> Self {
        Self::new(name, true, true, segments)
    }

    /// An optional group contributing any subset, in any order.
    pub fn optional_any(name: &str, segments: Vec<Segment>) -> Self {
        Self::new(name, true, false, segments)
    }

    /// Whether selections from this group are explored in every order.
    pub fn is_reorderable(&self) -> bool {
        self.optional
    }

    /// Returns the codes declared in this group, in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.code.as_str())
    }

    /// Returns every code in this group except those in `allow`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shell_aliases_core::{Segment, SegmentGroup};
    ///
    /// let res = SegmentGroup::optional_one(
    ///     "res",
    ///     vec![Segment::new("po", "pods"), Segment::new("svc", "service"), Segment::new("cm", "configmap")],
    /// );
    /// let excluded = res.codes_except(&["po"]);
    /// assert_eq!(excluded.into_iter().collect::<Vec<_>>(), vec!["cm", "svc"]);
    /// ```
    pub fn codes_except(&self, allow: &[&str]) -> BTreeSet<String> {
        self.codes()
            .filter(|code| !allow.contains(code))
            .map(String::from)
            .collect()
    }
}

/// Ordered list of segment groups.
///
/// Group order is part of the contract: constraint checks only look at
/// segments placed earlier, so reordering groups changes the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub groups: Vec<SegmentGroup>,
}

impl Catalog {
    pub fn new(groups: Vec<SegmentGroup>) -> Self {
        Self { groups }
    }

    /// Appends a group after every existing one.
    pub fn with_group(mut self, group: SegmentGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Finds a group by name.
    pub fn group(&self, name: &str) -> Option<&SegmentGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Total number of segments across all groups.
    pub fn segment_count(&self) -> usize {
        self.groups.iter().map(|g| g.segments.len()).sum()
    }
}

/// One ordered selection of segments across all groups.
///
/// Ordering is lexicographic over the segments, so a sequence sorts before
/// any longer sequence it is a prefix of.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate(pub Vec<Segment>);

impl Candidate {
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new candidate with `tail` appended.
    pub fn extended(&self, tail: &[Segment]) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + tail.len());
        segments.extend_from_slice(&self.0);
        segments.extend_from_slice(tail);
        Self(segments)
    }

    /// Concatenation of every segment's code (the alias key).
    pub fn key(&self) -> String {
        self.0.iter().map(|s| s.code.as_str()).collect()
    }

    /// Expansions joined with a single space (the alias value).
    pub fn expansion(&self) -> String {
        self.0
            .iter()
            .map(|s| s.expansion.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.key(), self.expansion())
    }
}
