//! Integration tests for quartogen
//!
//! These tests build real package trees in temp directories and verify:
//! - The generated manifest carries the package version from DESCRIPTION
//! - Reference parts are populated from the docs tree, sorted and filtered
//! - Output is deterministic across independent runs
//! - A missing reference directory degrades to an empty part, not a failure
//!
//! Each test uses its own isolated temp directory.

use std::path::Path;
use tempfile::TempDir;

use quartogen::manifest::ManifestBuilder;

/// Lay out a minimal package: DESCRIPTION plus a docs tree with reference
/// chapter files.
fn create_package(version: &str, regression: &[&str], classification: &[&str]) -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = temp_dir.path();

    std::fs::write(
        root.join("DESCRIPTION"),
        format!("Package: perfeval\nVersion: {version}\n"),
    )
    .expect("Failed to write DESCRIPTION");

    write_chapters(&root.join("docs/ref_regression"), regression);
    write_chapters(&root.join("docs/ref_classification"), classification);

    temp_dir
}

fn write_chapters(dir: &Path, names: &[&str]) {
    if names.is_empty() {
        return;
    }
    std::fs::create_dir_all(dir).expect("Failed to create reference dir");
    for name in names {
        std::fs::write(dir.join(name), "# chapter\n").expect("Failed to write chapter");
    }
}

/// Generate the manifest for a package root and parse it back.
fn generate(root: &Path) -> serde_yaml::Value {
    let mut builder = ManifestBuilder::new(root, "docs");
    builder.build();

    let output = root.join("docs/_quarto.yml");
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create docs dir");
    }
    builder.write(&output).expect("Failed to write manifest");

    let content = std::fs::read_to_string(&output).expect("Failed to read manifest back");
    serde_yaml::from_str(&content).expect("Output is not valid YAML")
}

/// Find a part mapping in the chapters list and return its chapter names.
fn part_chapters(doc: &serde_yaml::Value, part: &str) -> Vec<String> {
    doc["book"]["chapters"]
        .as_sequence()
        .expect("chapters sequence")
        .iter()
        .find(|entry| entry["part"].as_str() == Some(part))
        .unwrap_or_else(|| panic!("part '{part}' not in chapters"))["chapters"]
        .as_sequence()
        .expect("part chapters sequence")
        .iter()
        .map(|v| v.as_str().expect("chapter name").to_string())
        .collect()
}

#[test]
fn test_version_flows_from_description() {
    let pkg = create_package("2.1.0", &["mse.qmd", "mae.qmd"], &[]);
    let doc = generate(pkg.path());

    assert_eq!(doc["book"]["version"].as_str(), Some("2.1.0"));
    assert_eq!(doc["book"]["subtitle"].as_str(), Some("Version 2.1.0"));
}

#[test]
fn test_reference_parts_sorted_and_filtered() {
    let pkg = create_package(
        "1.0.0",
        &["mse.qmd", "mae.qmd", "README.md"],
        &["recall.qmd", "accuracy.qmd"],
    );
    let doc = generate(pkg.path());

    assert_eq!(
        part_chapters(&doc, "regression_functions.qmd"),
        vec!["ref_regression/mae.qmd", "ref_regression/mse.qmd"]
    );
    assert_eq!(
        part_chapters(&doc, "classification_functions.qmd"),
        vec![
            "ref_classification/accuracy.qmd",
            "ref_classification/recall.qmd"
        ]
    );
}

#[test]
fn test_missing_reference_dir_yields_empty_part() {
    let pkg = create_package("1.0.0", &["mse.qmd"], &[]);
    let doc = generate(pkg.path());

    assert_eq!(
        part_chapters(&doc, "regression_functions.qmd"),
        vec!["ref_regression/mse.qmd"]
    );
    assert!(part_chapters(&doc, "classification_functions.qmd").is_empty());
}

#[test]
fn test_missing_description_defaults_version() {
    let pkg = tempfile::tempdir().expect("Failed to create temp dir");
    let doc = generate(pkg.path());

    assert_eq!(doc["book"]["version"].as_str(), Some("0.0.0"));
}

#[test]
fn test_fixed_structure_is_present() {
    let pkg = create_package("1.0.0", &[], &[]);
    let doc = generate(pkg.path());

    assert_eq!(doc["project"]["type"].as_str(), Some("book"));
    assert_eq!(doc["bibliography"].as_str(), Some("references.bib"));
    assert_eq!(doc["highlight-style"].as_str(), Some("github"));
    assert_eq!(doc["execute"]["cache"].as_bool(), Some(true));
    assert_eq!(doc["format"]["pdf"]["documentclass"].as_str(), Some("scrreprt"));

    let chapters = doc["book"]["chapters"].as_sequence().expect("chapters");
    assert_eq!(chapters.first().and_then(|v| v.as_str()), Some("index.qmd"));
    assert_eq!(
        chapters.last().and_then(|v| v.as_str()),
        Some("references.qmd")
    );
}

#[test]
fn test_independent_runs_are_byte_identical() {
    let make_output = || {
        let pkg = create_package("3.0.1", &["huber.qmd", "ccc.qmd"], &["mcc.qmd"]);
        let mut builder = ManifestBuilder::new(pkg.path(), "docs");
        builder.build();
        let output = pkg.path().join("docs/_quarto.yml");
        builder.write(&output).expect("Failed to write manifest");
        std::fs::read(&output).expect("Failed to read manifest back")
    };

    assert_eq!(make_output(), make_output());
}

#[test]
fn test_write_to_missing_directory_fails_without_output() {
    let pkg = create_package("1.0.0", &[], &[]);
    let mut builder = ManifestBuilder::new(pkg.path(), "docs");
    builder.build();

    let output = pkg.path().join("no_such_dir/_quarto.yml");
    assert!(builder.write(&output).is_err());
    assert!(!output.exists());
}

#[test]
fn test_snapshot_before_population_is_valid_yaml() {
    let pkg = create_package("1.0.0", &["mse.qmd"], &[]);
    let builder = ManifestBuilder::new(pkg.path(), "docs");

    let output = pkg.path().join("docs/_quarto.yml");
    builder.write(&output).expect("Failed to write manifest");

    let content = std::fs::read_to_string(&output).expect("Failed to read manifest back");
    let doc: serde_yaml::Value = serde_yaml::from_str(&content).expect("valid YAML");
    assert!(part_chapters(&doc, "regression_functions.qmd").is_empty());
}
