//! Typed model of the `_quarto.yml` book manifest
//!
//! The top-level shape is fixed, so it is modelled as plain serde structs;
//! field declaration order is serialization order, which keeps the output
//! stable and diffable. Only the `chapters` list is heterogeneous: it mixes
//! plain filename entries with part mappings whose children are filled in
//! by a directory scan.

use serde::{Deserialize, Serialize};

/// The whole output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub project: Project,
    pub book: Book,
    pub bibliography: String,
    pub format: Format,
    #[serde(rename = "highlight-style")]
    pub highlight_style: String,
    pub execute: Execute,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub version: String,
    #[serde(rename = "repo-url")]
    pub repo_url: String,
    #[serde(rename = "repo-branch")]
    pub repo_branch: String,
    #[serde(rename = "repo-subdir")]
    pub repo_subdir: String,
    #[serde(rename = "repo-actions")]
    pub repo_actions: Vec<String>,
    pub sharing: Vec<String>,
    pub sidebar: Sidebar,
    pub downloads: Vec<String>,
    pub chapters: Vec<ChapterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sidebar {
    pub title: String,
}

/// One entry in the `chapters` list: either a chapter file or a part
/// grouping whose own chapter list is populated from a reference directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChapterEntry {
    File(String),
    Part(PartSection),
}

impl ChapterEntry {
    pub fn file(name: &str) -> Self {
        ChapterEntry::File(name.to_string())
    }

    /// A part placeholder with an empty chapter list.
    pub fn part(name: &str) -> Self {
        ChapterEntry::Part(PartSection {
            part: name.to_string(),
            chapters: Vec::new(),
            number_sections: false,
        })
    }
}

/// A part grouping. Identity is the `part` value, which must be unique
/// within the chapter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSection {
    pub part: String,
    pub chapters: Vec<String>,
    #[serde(rename = "number-sections")]
    pub number_sections: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Format {
    pub html: HtmlFormat,
    pub pdf: PdfFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlFormat {
    pub theme: Theme,
    pub fontsize: String,
    pub mainfont: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub light: Vec<String>,
    pub dark: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfFormat {
    pub documentclass: String,
    #[serde(rename = "keep-tex")]
    pub keep_tex: bool,
    #[serde(rename = "latex-auto-install")]
    pub latex_auto_install: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Execute {
    pub freeze: String,
    pub cache: bool,
}
