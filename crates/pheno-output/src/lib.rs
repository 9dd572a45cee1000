//! Phenotype manifest output generation.
//!
//! - **TSV**: tab-separated tables with a leading unnamed row index
//! - **JSON**: the full table as an array of row objects
//! - **Extracts**: naming and writing of the per-run derived tables

mod common;
mod extracts;
mod json;
mod tsv;

pub use extracts::{DEFAULT_PREFIX, ExtractPaths, write_extracts};
pub use json::{write_json, write_json_records};
pub use tsv::{write_indexed_tsv, write_tsv};
