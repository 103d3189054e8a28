//! Error types for catalog, configuration and header loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading catalogs, configuration or headers.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not select a known format.
    #[error("unsupported catalog format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// An `incompatible_except` rule names a group not declared earlier.
    #[error("segment '{segment}' references unknown group '{group}'")]
    UnknownGroup { segment: String, group: String },

    /// A group exceeds the configured segment limit.
    #[error("group '{group}' has {size} segments, limit is {limit}")]
    GroupTooLarge {
        group: String,
        size: usize,
        limit: usize,
    },

    /// The configured license header file does not exist.
    #[error("license header not found: {}", .0.display())]
    MissingHeader(PathBuf),
}

/// Convenience alias for results with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
