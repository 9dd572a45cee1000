//! JSON export of a whole table as an array of row objects.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use pheno_model::Table;

use crate::common::create_output_file;

/// Serialize `table` as `[{"col": value, ...}, ...]`, fields in column order.
pub fn write_json_records<W: Write>(table: &Table, mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, table).context("serialize json records")?;
    writer.flush().context("flush json")?;
    Ok(())
}

pub fn write_json(table: &Table, path: &Path) -> Result<()> {
    let writer = create_output_file(path)?;
    write_json_records(table, writer).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = table.height(), "wrote json");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pheno_model::CellValue;

    #[test]
    fn empty_table_is_empty_array() {
        let mut buf = Vec::new();
        write_json_records(&Table::new(["phenocode"]).unwrap(), &mut buf).unwrap();
        assert_eq!(buf, b"[]");
    }

    #[test]
    fn nulls_and_nan_serialize_as_null() {
        let table = Table::from_rows(
            ["coding", "lambda_gc_EUR"],
            vec![vec![CellValue::Null, CellValue::Float(f64::NAN)]],
        )
        .unwrap();
        let mut buf = Vec::new();
        write_json_records(&table, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            r#"[{"coding":null,"lambda_gc_EUR":null}]"#
        );
    }
}
