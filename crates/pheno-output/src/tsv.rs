//! Tab-separated output with a leading row index.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use pheno_model::Table;

use crate::common::create_output_file;

/// Write `table` as TSV to any writer.
///
/// The first column is unnamed and holds the zero-based row position, the
/// layout produced by default dataframe writers. Missing values are empty
/// fields.
pub fn write_indexed_tsv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut tsv = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    let header = std::iter::once("").chain(table.columns().iter().map(String::as_str));
    tsv.write_record(header).context("write tsv header")?;

    let mut fields: Vec<String> = Vec::with_capacity(table.width() + 1);
    for (idx, row) in table.rows().iter().enumerate() {
        fields.clear();
        fields.push(idx.to_string());
        fields.extend(row.iter().map(ToString::to_string));
        tsv.write_record(&fields)
            .with_context(|| format!("write tsv row {idx}"))?;
    }
    tsv.flush().context("flush tsv")?;
    Ok(())
}

/// Write `table` as an indexed TSV file at `path`.
pub fn write_tsv(table: &Table, path: &Path) -> Result<()> {
    let writer = create_output_file(path)?;
    write_indexed_tsv(table, writer).with_context(|| format!("write {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "wrote tsv"
    );
    Ok(())
}
