//! Error types for manifest ingestion.

use std::path::PathBuf;
use thiserror::Error;

use pheno_model::ReshapeError;

/// Errors that can occur while loading a manifest.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Manifest file not found.
    #[error("manifest file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Gzip stream is corrupt or truncated.
    #[error("failed to decompress {path}: {source}")]
    Decompress {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === TSV Parsing Errors ===
    /// Failed to parse TSV with Polars.
    #[error("failed to parse TSV {path}: {message}")]
    TsvParse { path: PathBuf, message: String },

    /// File has no content at all.
    #[error("manifest is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// A header cell is blank.
    #[error("manifest {path} has an empty column name")]
    EmptyColumnName { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Loaded frame does not form a valid table.
    #[error(transparent)]
    Table(#[from] ReshapeError),
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
