//! Quartogen - Quarto book manifest generator
//!
//! Builds the nested `_quarto.yml` configuration tree for the package
//! documentation book, populates the reference chapter groups by scanning
//! the docs tree for `.qmd` files, and serializes the result as
//! order-preserving YAML.

pub mod cli;
pub mod manifest;
