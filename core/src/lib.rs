//! Constrained combination engine for shell alias generation.
//!
//! This crate enumerates every legal alias for a multi-part command-line
//! tool from a declarative catalog:
//!
//! - [`Segment`] — a short code and its expansion, with "requires one of"
//!   and "incompatible with" rules over other segments' codes.
//! - [`SegmentGroup`] — ordered alternatives with a cardinality policy.
//! - [`Catalog`] — the ordered list of groups.
//! - [`Candidate`] — one ordered selection of segments.
//!
//! Generation ([`generate`]) walks the groups in order and keeps only
//! sequences accepted by [`is_valid`], whose checks look strictly backwards.
//! [`finalize`] sorts and deduplicates the result, and [`render_aliases`]
//! turns it into `alias key='value'` lines. [`lint_catalog`] reports
//! authoring mistakes the generator would otherwise prune silently.
//!
//! # Example
//!
//! ```
//! use shell_aliases_core::*;
//!
//! let catalog = Catalog::new(vec![
//!     SegmentGroup::mandatory_one("cmds", vec![Segment::new("k", "kubectl")]),
//!     SegmentGroup::optional_one("ops", vec![Segment::new("g", "get"), Segment::new("lo", "logs")]),
//!     SegmentGroup::optional_any("args", vec![Segment::new("w", "--watch").requires(["g"])]),
//! ]);
//!
//! let lines = render_aliases(&finalize(generate(&catalog)));
//! let shell: Vec<String> = lines.iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     shell,
//!     vec![
//!         "alias k='kubectl'",
//!         "alias kg='kubectl get'",
//!         "alias kgw='kubectl get --watch'",
//!         "alias klo='kubectl logs'",
//!     ]
//! );
//! assert!(lint_catalog(&catalog).is_empty());
//! ```

mod constraint;
mod generate;
mod lint;
mod order;
mod render;
mod types;

pub use constraint::{admits, is_valid};
pub use generate::{CandidateSet, generate, selections};
pub use lint::{CatalogIssue, lint_catalog};
pub use order::finalize;
pub use render::{AliasLine, find_key_collisions, render_aliases};
pub use types::*;
