//! Catalog sources, configuration and header resources for alias
//! generation.
//!
//! This crate supplies everything the pure engine in
//! [`shell_aliases_core`] needs from the outside world:
//!
//! - [`kubectl_catalog`] — the built-in kubectl catalog.
//! - [`load_catalog`] / [`save_catalog`] — YAML or JSON catalog files,
//!   including the `incompatible_except` authoring helper.
//! - [`AliasConfig`] — YAML configuration with header mode and
//!   [`LimitsConfig`] group size bounds.
//! - [`load_header`] — the license header printed before piped output.
//!
//! # Quick start
//!
//! ```
//! use shell_aliases_catalog::{AliasConfig, kubectl_catalog};
//! use shell_aliases_core::{finalize, generate};
//!
//! let config = AliasConfig::default();
//! let catalog = kubectl_catalog();
//! config.limits.check(&catalog).unwrap();
//!
//! let aliases = finalize(generate(&catalog));
//! assert_eq!(aliases[0].key(), "k");
//! ```
//!
//! # Feature flags
//!
//! - **`clap`**: derives `clap::ValueEnum` for [`HeaderMode`].

mod builtin;
mod config;
mod error;
mod file;
mod header;

pub use builtin::kubectl_catalog;
pub use config::{AliasConfig, DEFAULT_MAX_GROUP_SEGMENTS, HeaderMode, LimitsConfig};
pub use error::{CatalogError, Result};
pub use file::{
    CATALOG_FORMAT_VERSION, CatalogFile, CatalogFormat, ExceptRule, GroupSpec, SegmentSpec,
    load_catalog, save_catalog,
};
pub use header::{DEFAULT_LICENSE_HEADER, load_header};
