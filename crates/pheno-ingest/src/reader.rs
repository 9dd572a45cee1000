//! Manifest file reading: gzip/bgzip decompression and TSV parsing.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use polars::prelude::*;
use tracing::{debug, warn};

use pheno_model::Table;

use crate::convert::table_from_frame;
use crate::error::{IngestError, Result};

/// Marker the manifest uses for missing values.
pub const MISSING_MARKER: &str = "NA";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Returns true when `bytes` start with the gzip magic number.
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[..2] == GZIP_MAGIC
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reads the whole file, transparently inflating gzip and block-gzip input.
///
/// Block-gzip files are a series of concatenated gzip members, so a
/// multi-member decoder is used for both.
pub fn read_manifest_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    open_file(path)?
        .read_to_end(&mut raw)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    if !is_gzip(&raw) {
        debug!(path = %path.display(), bytes = raw.len(), "reading uncompressed manifest");
        return Ok(raw);
    }

    let mut inflated = Vec::with_capacity(raw.len() * 4);
    MultiGzDecoder::new(raw.as_slice())
        .read_to_end(&mut inflated)
        .map_err(|e| IngestError::Decompress {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!(
        path = %path.display(),
        compressed_bytes = raw.len(),
        bytes = inflated.len(),
        "decompressed manifest"
    );
    Ok(inflated)
}

/// Parses tab-separated bytes into a DataFrame, inferring column types
/// over every row.
pub fn parse_tsv(bytes: Vec<u8>, path: &Path) -> Result<DataFrame> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|options| {
            options
                .with_separator(b'\t')
                .with_quote_char(None)
                .with_null_values(Some(NullValues::AllColumnsSingle(MISSING_MARKER.into())))
        })
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::TsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_frame_shape(&df, path)?;
    Ok(df)
}

/// Validate DataFrame shape after loading.
///
/// Blank column names are rejected; a frame without rows is allowed but
/// logged, since every downstream output would be empty.
pub fn validate_frame_shape(df: &DataFrame, path: &Path) -> Result<()> {
    for name in df.get_column_names() {
        if name.trim().is_empty() {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }
    }

    if df.height() == 0 {
        warn!(path = %path.display(), "manifest has a header but no rows");
    }

    Ok(())
}

/// Load a phenotype manifest into a [`Table`].
///
/// Accepts `.tsv`, `.tsv.gz` and `.tsv.bgz`; the compression is detected
/// from the file contents, not the extension.
pub fn read_manifest(path: &Path) -> Result<Table> {
    let bytes = read_manifest_bytes(path)?;
    let df = parse_tsv(bytes, path)?;
    let table = table_from_frame(&df)?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "loaded manifest"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_tsv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_is_gzip() {
        assert!(is_gzip(&[0x1f, 0x8b, 0x08]));
        assert!(!is_gzip(b"trait_type\tphenocode"));
        assert!(!is_gzip(&[0x1f]));
    }

    #[test]
    fn test_parse_tsv_infers_types() {
        let file = create_temp_tsv("phenocode\tn_cases_EUR\tlambda_gc_EUR\nabc\t10\t1.02\nxyz\tNA\t0.98\n");
        let bytes = read_manifest_bytes(file.path()).unwrap();
        let df = parse_tsv(bytes, file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 3);
        assert_eq!(df.column("n_cases_EUR").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("lambda_gc_EUR").unwrap().dtype(), &DataType::Float64);
        assert_eq!(df.column("n_cases_EUR").unwrap().null_count(), 1);
    }

    #[test]
    fn test_parse_tsv_empty_file() {
        let file = create_temp_tsv("");
        let bytes = read_manifest_bytes(file.path()).unwrap();
        let result = parse_tsv(bytes, file.path());

        assert!(matches!(result, Err(IngestError::EmptyFile { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_manifest(Path::new("/nonexistent/phenotype_manifest.tsv.bgz"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
