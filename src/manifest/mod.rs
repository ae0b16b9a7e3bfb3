//! Book manifest construction
//!
//! [`ManifestBuilder`] owns the manifest tree for one generation run: it
//! builds the fixed skeleton (reading the package version up front), fills
//! the part placeholders from the reference directories, and writes the
//! result out as YAML. Population is best-effort — a missing reference
//! directory or an unknown part degrades the output instead of aborting the
//! build — while a failure to write the output file is fatal.

pub mod model;
pub mod scan;
pub mod version;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use model::{
    Book, ChapterEntry, Execute, Format, HtmlFormat, Manifest, PdfFormat, Project, Sidebar, Theme,
};
pub use version::DEFAULT_VERSION;

/// Errors from manifest construction and output.
///
/// Metadata and scan failures are absorbed by the builder (warn + degrade);
/// only encode and write failures reach the caller.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Metadata { path: PathBuf, source: io::Error },

    #[error("no 'Version:' field in {path}")]
    VersionNotFound { path: PathBuf },

    #[error("failed to scan {path}: {source}")]
    Scan { path: PathBuf, source: io::Error },

    #[error("failed to encode manifest: {0}")]
    Encode(#[from] serde_yaml::Error),

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Part identifiers and the reference directories that populate them.
const PARTS: &[(&str, &str)] = &[
    ("regression_functions.qmd", "ref_regression"),
    ("classification_functions.qmd", "ref_classification"),
];

/// Builds the `_quarto.yml` manifest for one documentation build.
///
/// One builder per run; it owns its tree exclusively and holds no process
/// state, so several builders can coexist in one process.
pub struct ManifestBuilder {
    docs_dir: PathBuf,
    manifest: Manifest,
}

impl ManifestBuilder {
    /// Construct the skeleton manifest for the package rooted at `base_dir`,
    /// with `.qmd` sources under `base_dir/docs_dir`.
    ///
    /// A missing or version-less `DESCRIPTION` is logged and replaced by
    /// [`DEFAULT_VERSION`] rather than failing the build.
    pub fn new(base_dir: &Path, docs_dir: &str) -> Self {
        let version = version::read_version(base_dir).unwrap_or_else(|err| {
            warn!("{err}; falling back to version {DEFAULT_VERSION}");
            DEFAULT_VERSION.to_string()
        });

        ManifestBuilder {
            docs_dir: base_dir.join(docs_dir),
            manifest: skeleton(&version),
        }
    }

    /// The manifest tree as currently assembled.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Position of the part named `part` in the chapter list.
    pub fn locate_part(&self, part: &str) -> Option<usize> {
        self.manifest
            .book
            .chapters
            .iter()
            .position(|entry| matches!(entry, ChapterEntry::Part(p) if p.part == part))
    }

    /// Fill the part named `part` with the `.qmd` files of `subdir`
    /// (relative to the docs directory), sorted by filename.
    ///
    /// An unknown part is skipped with a warning; a missing directory yields
    /// an empty chapter list. Only a genuine scan failure is returned.
    pub fn populate_part(&mut self, part: &str, subdir: &str) -> Result<(), ManifestError> {
        let Some(idx) = self.locate_part(part) else {
            warn!("part '{part}' not found in the chapter list; skipping");
            return Ok(());
        };

        let dir = self.docs_dir.join(subdir);
        let files = scan::qmd_files(&dir).map_err(|source| ManifestError::Scan {
            path: dir.clone(),
            source,
        })?;
        debug!("part '{part}': {} chapter(s) from {}", files.len(), dir.display());

        let chapters = files
            .into_iter()
            .map(|name| format!("{subdir}/{name}"))
            .collect();
        if let ChapterEntry::Part(p) = &mut self.manifest.book.chapters[idx] {
            p.chapters = chapters;
        }
        Ok(())
    }

    /// Populate every known part. Scan failures are reported and absorbed so
    /// a partially populated manifest is still produced.
    pub fn build(&mut self) {
        for (part, subdir) in PARTS {
            if let Err(err) = self.populate_part(part, subdir) {
                warn!("could not populate part '{part}': {err}; leaving it empty");
            }
        }
    }

    /// Encode the manifest as YAML, preserving construction order.
    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        Ok(serde_yaml::to_string(&self.manifest)?)
    }

    /// Write the manifest to `path`. Encoding happens before the file is
    /// touched, so a failure never leaves a partial output file.
    pub fn write(&self, path: &Path) -> Result<(), ManifestError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|source| ManifestError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// The fixed manifest skeleton, parts still empty.
fn skeleton(version: &str) -> Manifest {
    Manifest {
        project: Project {
            kind: "book".to_string(),
        },
        book: Book {
            title: "{perfeval}: Machine Learning Performance Evaluation".to_string(),
            subtitle: format!("Version {version}"),
            author: "The perfeval authors".to_string(),
            version: version.to_string(),
            repo_url: "https://github.com/perfeval/perfeval".to_string(),
            repo_branch: "development".to_string(),
            repo_subdir: "docs".to_string(),
            repo_actions: vec!["edit".into(), "source".into(), "issue".into()],
            sharing: vec!["twitter".into(), "facebook".into(), "linkedin".into()],
            sidebar: Sidebar {
                title: "Documentation".to_string(),
            },
            downloads: vec!["pdf".into(), "epub".into()],
            chapters: vec![
                ChapterEntry::file("index.qmd"),
                ChapterEntry::file("intro.qmd"),
                ChapterEntry::file("summary.qmd"),
                ChapterEntry::file("benchmark.qmd"),
                ChapterEntry::part("regression_functions.qmd"),
                ChapterEntry::part("classification_functions.qmd"),
                ChapterEntry::file("references.qmd"),
            ],
        },
        bibliography: "references.bib".to_string(),
        format: Format {
            html: HtmlFormat {
                theme: Theme {
                    light: vec!["cosmo".into(), "theme-light.scss".into()],
                    dark: vec!["slate".into(), "theme-dark.scss".into()],
                },
                fontsize: "18px".to_string(),
                mainfont: "calibri".to_string(),
            },
            pdf: PdfFormat {
                documentclass: "scrreprt".to_string(),
                keep_tex: true,
                latex_auto_install: true,
            },
        },
        highlight_style: "github".to_string(),
        execute: Execute {
            freeze: "auto".to_string(),
            cache: true,
        },
    }
}
