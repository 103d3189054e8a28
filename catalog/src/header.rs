//! License header resource.

use std::path::Path;

use crate::error::{CatalogError, Result};

/// Header text embedded at build time.
pub const DEFAULT_LICENSE_HEADER: &str = include_str!("../license_header");

/// Reads the license header, falling back to the embedded text when no
/// path is given.
///
/// The text is returned verbatim.
///
/// # Errors
///
/// Returns [`CatalogError::MissingHeader`] if `path` does not exist, or
/// [`CatalogError::Io`] if it cannot be read.
pub fn load_header(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        return Ok(DEFAULT_LICENSE_HEADER.to_string());
    };
    if !path.exists() {
        return Err(CatalogError::MissingHeader(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}
