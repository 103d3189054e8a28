//! Advisory catalog linting.
//!
//! The generator accepts any catalog and silently prunes whatever cannot be
//! satisfied. Linting surfaces the authoring mistakes that pruning hides:
//! typos in rule codes, empty mandatory groups, and codes that would render
//! the same alias twice.
//!
//! # Examples
//!
//! ```
//! use shell_aliases_core::*;
//!
//! let catalog = Catalog::new(vec![
//!     SegmentGroup::mandatory_one("cmds", vec![Segment::new("k", "kubectl")]),
//!     SegmentGroup::optional_one("res", vec![Segment::new("po", "pods").requires(["gt"])]),
//! ]);
//! let issues = lint_catalog(&catalog);
//! assert!(issues.iter().any(|i| matches!(i, CatalogIssue::UnresolvedRequirement { .. })));
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Catalog, Segment, SegmentGroup};

/// Catalog authoring problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    /// A segment has an empty or whitespace-only code.
    #[error("empty segment code in group '{group}'")]
    EmptyCode { group: String },
    /// A segment has an empty expansion.
    #[error("segment '{code}' in group '{group}' has an empty expansion")]
    EmptyExpansion { group: String, code: String },
    /// A mandatory group has no segments, so nothing can be generated.
    #[error("mandatory group '{0}' has no segments")]
    EmptyMandatoryGroup(String),
    /// A required code is not provided by any segment that can precede this one.
    #[error("segment '{code}' requires '{missing}', which no earlier segment provides")]
    UnresolvedRequirement { code: String, missing: String },
    /// An incompatible code is not provided by any segment that can precede this one.
    #[error("segment '{code}' is incompatible with unknown code '{missing}'")]
    UnknownIncompatibility { code: String, missing: String },
    /// Two segments in one group share a code and can be selected under
    /// the same preceding segments.
    #[error("code '{code}' is ambiguous in group '{group}'")]
    AmbiguousCode { group: String, code: String },
}

/// Lints a catalog, returning every issue found.
pub fn lint_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut earlier: HashSet<&str> = HashSet::new();

    for group in &catalog.groups {
        if !group.optional && group.segments.is_empty() {
            issues.push(CatalogIssue::EmptyMandatoryGroup(group.name.clone()));
        }

        for (index, segment) in group.segments.iter().enumerate() {
            let mut visible = earlier.clone();
            visible.extend(preceding_siblings(group, index));
            issues.extend(lint_segment(group, segment, &visible));
        }
        issues.extend(lint_ambiguous_codes(group));
        earlier.extend(group.codes());
    }

    issues
}

/// Codes from the same group that can be placed before `group.segments[index]`.
///
/// A take-exactly-one group never places a sibling first. A reorderable
/// group can place any other sibling first; a fixed-order group only those
/// declared before it.
fn preceding_siblings(group: &SegmentGroup, index: usize) -> impl Iterator<Item = &str> {
    let take_none = group.take_exactly_one;
    let any_order = group.is_reorderable();
    group
        .segments
        .iter()
        .enumerate()
        .filter(move |&(i, _)| !take_none && i != index && (any_order || i < index))
        .map(|(_, s)| s.code.as_str())
}

fn lint_segment(group: &SegmentGroup, segment: &Segment, visible: &HashSet<&str>) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    if segment.code.trim().is_empty() {
        issues.push(CatalogIssue::EmptyCode {
            group: group.name.clone(),
        });
        return issues;
    }
    if segment.expansion.trim().is_empty() {
        issues.push(CatalogIssue::EmptyExpansion {
            group: group.name.clone(),
            code: segment.code.clone(),
        });
    }

    for required in &segment.requires_one_of {
        if !visible.contains(required.as_str()) {
            issues.push(CatalogIssue::UnresolvedRequirement {
                code: segment.code.clone(),
                missing: required.clone(),
            });
        }
    }
    for incompatible in &segment.incompatible_with {
        if !visible.contains(incompatible.as_str()) {
            issues.push(CatalogIssue::UnknownIncompatibility {
                code: segment.code.clone(),
                missing: incompatible.clone(),
            });
        }
    }

    issues
}

fn lint_ambiguous_codes(group: &SegmentGroup) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut reported: HashSet<&str> = HashSet::new();

    for (i, first) in group.segments.iter().enumerate() {
        for second in &group.segments[i + 1..] {
            if first.code != second.code || reported.contains(first.code.as_str()) {
                continue;
            }
            let overlapping = first.requires_one_of.is_empty()
                || second.requires_one_of.is_empty()
                || !first.requires_one_of.is_disjoint(&second.requires_one_of);
            if overlapping {
                reported.insert(first.code.as_str());
                issues.push(CatalogIssue::AmbiguousCode {
                    group: group.name.clone(),
                    code: first.code.clone(),
                });
            }
        }
    }

    issues
}
