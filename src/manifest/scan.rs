//! Reference directory scanning
//!
//! Lists the immediate `.qmd` files of a directory, sorted lexicographically
//! so the generated chapter order is reproducible. A missing directory is an
//! expected outcome (reference subtrees are optional) and yields an empty
//! list; only a genuine scan failure is an error.

use std::io;
use std::path::Path;

/// Chapter source extension the scan filters on.
pub const CHAPTER_EXTENSION: &str = ".qmd";

/// List the `.qmd` filenames directly inside `dir`, sorted by name.
pub fn qmd_files(dir: &Path) -> io::Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.ends_with(CHAPTER_EXTENSION) {
            names.push(name.into_owned());
        }
    }
    names.sort();
    Ok(names)
}
