//! Conversion from Polars frames to the row model.

use polars::prelude::{AnyValue, DataFrame};

use pheno_model::{CellValue, Table};

use crate::error::Result;

/// Converts a Polars `AnyValue` into a [`CellValue`].
///
/// Integer widths collapse to `i64` (unsigned values that do not fit become
/// floats), strings are kept verbatim, and anything else falls back to its
/// textual form.
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Null,
        AnyValue::Boolean(b) => CellValue::Bool(b),
        AnyValue::Int32(v) => CellValue::Int(i64::from(v)),
        AnyValue::Int64(v) => CellValue::Int(v),
        AnyValue::UInt32(v) => CellValue::Int(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => CellValue::Int(v),
            Err(_) => CellValue::Float(v as f64),
        },
        AnyValue::Float32(v) => CellValue::Float(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Float(v),
        AnyValue::String(s) => CellValue::Str(s.to_string()),
        AnyValue::StringOwned(s) => CellValue::Str(s.to_string()),
        other => CellValue::Str(other.to_string()),
    }
}

/// Materialize a DataFrame as a [`Table`], keeping column and row order.
pub fn table_from_frame(df: &DataFrame) -> Result<Table> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect();
    let mut rows: Vec<Vec<CellValue>> = (0..df.height())
        .map(|_| Vec::with_capacity(columns.len()))
        .collect();
    for column in df.get_columns() {
        for (idx, row) in rows.iter_mut().enumerate() {
            row.push(any_to_cell(column.get(idx)?));
        }
    }
    Ok(Table::from_rows(columns, rows)?)
}
