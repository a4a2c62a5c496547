//! Loading reference-range overrides from TOML files.

use std::path::Path;

use tracing::info;

use thyro_model::{RangeOverrides, ReferenceRanges, Result, ThyroError};

/// Read an override file.
///
/// # Errors
///
/// Returns [`ThyroError::Io`] if the file cannot be read and
/// [`ThyroError::Toml`] if it is not a valid override set.
pub fn load_overrides(path: &Path) -> Result<RangeOverrides> {
    let contents = std::fs::read_to_string(path).map_err(|e| ThyroError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| ThyroError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Build the effective range table: defaults, with the file's overrides
/// applied when a path is given.
///
/// # Errors
///
/// Propagates read, parse, and validation failures.
pub fn load_ranges(path: Option<&Path>) -> Result<ReferenceRanges> {
    let defaults = ReferenceRanges::default();
    let Some(path) = path else {
        return Ok(defaults);
    };
    let overrides = load_overrides(path)?;
    let ranges = defaults.with_overrides(&overrides)?;
    info!(path = %path.display(), "loaded reference range overrides");
    Ok(ranges)
}
