//! Catalog file format with YAML and JSON loaders.
//!
//! A catalog file mirrors [`Catalog`] with one authoring helper:
//! `incompatible_except` expands to every code of a named earlier group
//! except an allowlist, and merges into `incompatible_with`.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! groups:
//!   - name: cmds
//!     optional: false
//!     take_exactly_one: true
//!     segments:
//!       - { code: k, expansion: kubectl }
//!   - name: res
//!     optional: true
//!     take_exactly_one: true
//!     segments:
//!       - { code: po, expansion: pods, requires_one_of: [g] }
//!   - name: args
//!     optional: true
//!     take_exactly_one: false
//!     segments:
//!       - code: sl
//!         expansion: --show-labels
//!         incompatible_except: { group: res, allow: [po] }
//! ```

use std::collections::BTreeSet;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use shell_aliases_core::{Catalog, Segment, SegmentGroup};
use tracing::debug;

use crate::error::{CatalogError, Result};

/// Current catalog file format version.
pub const CATALOG_FORMAT_VERSION: &str = "1.0";

/// Serialization format for catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// Selects a format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnsupportedFormat`] for anything other than
    /// `.yaml`, `.yml` or `.json`.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Incompatibility with every code of `group` except `allow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptRule {
    pub group: String,
    #[serde(default)]
    pub allow: Vec<String>,
}

/// A segment as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub code: String,
    pub expansion: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub requires_one_of: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub incompatible_with: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incompatible_except: Option<ExceptRule>,
}

/// A group as written in a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub name: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub take_exactly_one: bool,
    #[serde(default)]
    pub segments: Vec<SegmentSpec>,
}

/// Top-level catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: String,
    pub groups: Vec<GroupSpec>,
}

impl CatalogFile {
    /// Resolves authoring helpers into a plain [`Catalog`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownGroup`] if an `incompatible_except`
    /// rule names a group that is not declared before the segment's group.
    pub fn resolve(self) -> Result<Catalog> {
        let mut groups: Vec<SegmentGroup> = Vec::with_capacity(self.groups.len());

        for spec in self.groups {
            let mut segments = Vec::with_capacity(spec.segments.len());
            for segment in spec.segments {
                segments.push(resolve_segment(segment, &groups)?);
            }
            groups.push(SegmentGroup::new(
                &spec.name,
                spec.optional,
                spec.take_exactly_one,
                segments,
            ));
        }

        Ok(Catalog::new(groups))
    }

    /// Builds a file representation of an existing catalog.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let groups = catalog
            .groups
            .iter()
            .map(|group| GroupSpec {
                name: group.name.clone(),
                optional: group.optional,
                take_exactly_one: group.take_exactly_one,
                segments: group
                    .segments
                    .iter()
                    .map(|segment| SegmentSpec {
                        code: segment.code.clone(),
                        expansion: segment.expansion.clone(),
                        requires_one_of: segment.requires_one_of.clone(),
                        incompatible_with: segment.incompatible_with.clone(),
                        incompatible_except: None,
                    })
                    .collect(),
            })
            .collect();

        Self {
            version: CATALOG_FORMAT_VERSION.to_string(),
            groups,
        }
    }

    /// Parses a catalog file from a string.
    pub fn parse(input: &str, format: CatalogFormat) -> Result<Self> {
        Self::from_reader(input.as_bytes(), format)
    }

    /// Parses a catalog file from a reader.
    pub fn from_reader<R: Read>(reader: R, format: CatalogFormat) -> Result<Self> {
        let file = match format {
            CatalogFormat::Yaml => serde_yaml::from_reader(reader)?,
            CatalogFormat::Json => serde_json::from_reader(reader)?,
        };
        Ok(file)
    }

    /// Serializes the catalog file.
    pub fn render(&self, format: CatalogFormat) -> Result<String> {
        let text = match format {
            CatalogFormat::Yaml => serde_yaml::to_string(self)?,
            CatalogFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(text)
    }
}

fn resolve_segment(spec: SegmentSpec, earlier: &[SegmentGroup]) -> Result<Segment> {
    let mut incompatible_with = spec.incompatible_with;

    if let Some(rule) = spec.incompatible_except {
        let group = earlier
            .iter()
            .find(|g| g.name == rule.group)
            .ok_or_else(|| CatalogError::UnknownGroup {
                segment: spec.code.clone(),
                group: rule.group.clone(),
            })?;
        let allow: Vec<&str> = rule.allow.iter().map(String::as_str).collect();
        incompatible_with.extend(group.codes_except(&allow));
    }

    Ok(Segment {
        code: spec.code,
        expansion: spec.expansion,
        requires_one_of: spec.requires_one_of,
        incompatible_with,
    })
}

/// Loads a catalog from a `.yaml`, `.yml` or `.json` file.
///
/// # Errors
///
/// Returns [`CatalogError::UnsupportedFormat`] for unknown extensions,
/// [`CatalogError::Io`] if the file cannot be read, a parse error if the
/// content is malformed, or [`CatalogError::UnknownGroup`] from resolution.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;
    let reader = BufReader::new(std::fs::File::open(path)?);

    let catalog = CatalogFile::from_reader(reader, format)?.resolve()?;
    debug!(
        path = %path.display(),
        groups = catalog.groups.len(),
        segments = catalog.segment_count(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Saves a catalog, choosing the format from the file extension.
///
/// # Errors
///
/// Returns [`CatalogError::UnsupportedFormat`] for unknown extensions, or an
/// I/O or serialization error.
pub fn save_catalog(catalog: &Catalog, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;
    let writer = BufWriter::new(std::fs::File::create(path)?);
    let file = CatalogFile::from_catalog(catalog);

    match format {
        CatalogFormat::Yaml => serde_yaml::to_writer(writer, &file)?,
        CatalogFormat::Json => serde_json::to_writer_pretty(writer, &file)?,
    }
    Ok(())
}
