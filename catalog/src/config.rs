//! Generator configuration.
//!
//! Loaded from YAML; every field has a default so an empty document is a
//! valid configuration.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! catalog: ./kubectl.yaml
//! header_file: ./license_header
//! header: auto
//! limits:
//!   max_group_segments: 16
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shell_aliases_core::Catalog;

use crate::error::{CatalogError, Result};

/// Default per-group segment cap.
pub const DEFAULT_MAX_GROUP_SEGMENTS: usize = 16;

/// When to print the license header before shell output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum HeaderMode {
    /// Only when stdout is not a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl HeaderMode {
    /// Decides whether to emit the header for the given destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use shell_aliases_catalog::HeaderMode;
    ///
    /// assert!(HeaderMode::Auto.should_emit(false));
    /// assert!(!HeaderMode::Auto.should_emit(true));
    /// assert!(HeaderMode::Always.should_emit(true));
    /// assert!(!HeaderMode::Never.should_emit(false));
    /// ```
    pub fn should_emit(self, stdout_is_terminal: bool) -> bool {
        match self {
            Self::Auto => !stdout_is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Bounds enforced before generation.
///
/// The generator itself never self-limits; its cost grows with the
/// factorial of reorderable group sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum segments in any single group.
    #[serde(default = "default_max_group_segments")]
    pub max_group_segments: usize,
}

fn default_max_group_segments() -> usize {
    DEFAULT_MAX_GROUP_SEGMENTS
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_group_segments: DEFAULT_MAX_GROUP_SEGMENTS,
        }
    }
}

impl LimitsConfig {
    /// Checks every group of `catalog` against the segment cap.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::GroupTooLarge`] for the first oversized group.
    pub fn check(&self, catalog: &Catalog) -> Result<()> {
        for group in &catalog.groups {
            if group.segments.len() > self.max_group_segments {
                return Err(CatalogError::GroupTooLarge {
                    group: group.name.clone(),
                    size: group.segments.len(),
                    limit: self.max_group_segments,
                });
            }
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasConfig {
    /// Configuration format version (e.g. `"1.0"`).
    #[serde(default = "default_version")]
    pub version: String,
    /// Catalog file to use instead of the built-in one.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// License header file to use instead of the embedded one.
    #[serde(default)]
    pub header_file: Option<PathBuf>,
    #[serde(default)]
    pub header: HeaderMode,
    #[serde(default)]
    pub limits: LimitsConfig,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            catalog: None,
            header_file: None,
            header: HeaderMode::default(),
            limits: LimitsConfig::default(),
        }
    }
}

impl AliasConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::CatalogError::Io) if the file cannot be read,
    /// or [`Yaml`](crate::CatalogError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::CatalogError::Io) if the file cannot be
    /// written, or [`Yaml`](crate::CatalogError::Yaml) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shell_aliases_core::{Segment, SegmentGroup};

    use super::*;

    #[test]
    fn test_deserialize_complete() {
        let yaml = r#"
version: "1.0"
catalog: /etc/aliases/kubectl.yaml
header_file: /etc/aliases/header
header: never
limits:
  max_group_segments: 8
"#;
        let config: AliasConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/etc/aliases/kubectl.yaml")));
        assert_eq!(config.header_file, Some(PathBuf::from("/etc/aliases/header")));
        assert_eq!(config.header, HeaderMode::Never);
        assert_eq!(config.limits.max_group_segments, 8);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: AliasConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.version, "1.0");
        assert!(config.catalog.is_none());
        assert_eq!(config.header, HeaderMode::Auto);
        assert_eq!(config.limits.max_group_segments, DEFAULT_MAX_GROUP_SEGMENTS);
    }

    #[test]
    fn test_limits_reject_oversized_group() {
        let segments = (0..4).map(|i| Segment::new(&format!("f{i}"), "-f")).collect();
        let catalog = Catalog::new(vec![
            SegmentGroup::mandatory_one("cmds", vec![Segment::new("k", "kubectl")]),
            SegmentGroup::optional_any("args", segments),
        ]);

        let limits = LimitsConfig {
            max_group_segments: 3,
        };
        let err = limits.check(&catalog).unwrap_err();
        assert_eq!(err.to_string(), "group 'args' has 4 segments, limit is 3");

        assert!(LimitsConfig::default().check(&catalog).is_ok());
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let original = AliasConfig {
            catalog: Some(PathBuf::from("catalog.json")),
            header: HeaderMode::Always,
            ..AliasConfig::default()
        };
        original.save(&path).unwrap();

        let loaded = AliasConfig::load(&path).unwrap();
        assert_eq!(loaded.catalog, original.catalog);
        assert_eq!(loaded.header, HeaderMode::Always);
        assert_eq!(loaded.limits.max_group_segments, DEFAULT_MAX_GROUP_SEGMENTS);
    }
}
