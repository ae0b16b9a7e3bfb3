//! Package version extraction
//!
//! The documented package keeps its version in an R `DESCRIPTION` file as a
//! `Version: X.Y.Z` line. The first match wins.

use regex::Regex;
use std::path::Path;

use super::ManifestError;

/// Metadata file read at construction time, relative to the package root.
pub const METADATA_FILE: &str = "DESCRIPTION";

/// Substituted when the metadata file is missing or carries no version line.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Read the package version from `<base_dir>/DESCRIPTION`.
pub fn read_version(base_dir: &Path) -> Result<String, ManifestError> {
    let path = base_dir.join(METADATA_FILE);
    let content = std::fs::read_to_string(&path).map_err(|source| ManifestError::Metadata {
        path: path.clone(),
        source,
    })?;

    let re = Regex::new(r"(?m)^Version:\s*(\S+)").expect("valid regex");
    re.captures(&content)
        .map(|caps| caps[1].to_string())
        .ok_or(ManifestError::VersionNotFound { path })
}
