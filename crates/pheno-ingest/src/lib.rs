//! Phenotype manifest ingestion.
//!
//! Loads a (block-)gzip compressed, tab-separated manifest into Polars for
//! type inference, then materializes it as a [`pheno_model::Table`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pheno_ingest::read_manifest;
//!
//! let table = read_manifest(Path::new("phenotype_manifest.tsv.bgz"))?;
//! println!("{} phenotypes", table.height());
//! ```

mod convert;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Reading ===
pub use reader::{
    MISSING_MARKER, is_gzip, parse_tsv, read_manifest, read_manifest_bytes, validate_frame_shape,
};

// === Conversion ===
pub use convert::{any_to_cell, table_from_frame};
