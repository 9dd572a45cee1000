//! Wide-to-long reshaping and row concatenation.

use tracing::debug;

use pheno_model::{CellValue, POPULATION_COLUMN, ReshapeError, Result, Table};

fn resolve_columns<S: AsRef<str>>(table: &Table, names: &[S]) -> Result<Vec<usize>> {
    names
        .iter()
        .map(|name| table.require_column(name.as_ref()))
        .collect()
}

/// Unpivot `value_columns` into one row per (input row, value column).
///
/// The output carries `id_columns` unchanged, a `population` column holding
/// `population_extractor(value_column)`, and a `value_name` column holding
/// the original cell. Rows are emitted column-major: every input row for the
/// first value column, then every input row for the second, and so on.
///
/// Every named column must exist in `table`. Population codes are extracted
/// before any row is produced, so a malformed column name fails the whole
/// call.
pub fn melt_population_metric<I, V, F>(
    table: &Table,
    id_columns: &[I],
    value_columns: &[V],
    population_extractor: F,
    value_name: &str,
) -> Result<Table>
where
    I: AsRef<str>,
    V: AsRef<str>,
    F: Fn(&str) -> Result<String>,
{
    let id_idx = resolve_columns(table, id_columns)?;
    let value_idx = resolve_columns(table, value_columns)?;
    let populations = value_columns
        .iter()
        .map(|column| population_extractor(column.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let columns = id_columns
        .iter()
        .map(|name| name.as_ref().to_string())
        .chain([POPULATION_COLUMN.to_string(), value_name.to_string()]);
    let mut melted = Table::new(columns)?;

    for (&column, population) in value_idx.iter().zip(&populations) {
        for row in table.rows() {
            let mut values = Vec::with_capacity(id_idx.len() + 2);
            values.extend(id_idx.iter().map(|&idx| row[idx].clone()));
            values.push(CellValue::Str(population.clone()));
            values.push(row[column].clone());
            melted.push_row(values)?;
        }
    }

    debug!(
        input_rows = table.height(),
        value_columns = value_columns.len(),
        output_rows = melted.height(),
        value_name,
        "melted wide columns"
    );
    Ok(melted)
}

/// Concatenate tables in sequence order.
///
/// All tables must share the same column set. Output columns follow the
/// first table; later tables are realigned by name, and each table's row
/// order is kept.
pub fn combine_tables<I>(tables: I) -> Result<Table>
where
    I: IntoIterator<Item = Table>,
{
    let mut tables = tables.into_iter();
    let first = tables.next().ok_or(ReshapeError::NoTables)?;
    let (columns, mut rows) = first.into_parts();
    let reference = Table::new(columns.iter().cloned())?;

    for (offset, table) in tables.enumerate() {
        if !reference.has_same_columns(&table) {
            return Err(ReshapeError::ColumnMismatch {
                index: offset + 1,
                expected: columns.clone(),
                found: table.columns().to_vec(),
            });
        }
        let positions = columns
            .iter()
            .map(|name| table.require_column(name))
            .collect::<Result<Vec<_>>>()?;
        let (_, table_rows) = table.into_parts();
        if positions.iter().enumerate().all(|(target, &source)| target == source) {
            rows.extend(table_rows);
        } else {
            rows.extend(table_rows.into_iter().map(|mut row| {
                positions
                    .iter()
                    .map(|&idx| std::mem::replace(&mut row[idx], CellValue::Null))
                    .collect::<Vec<_>>()
            }));
        }
    }

    let combined = Table::from_rows(columns, rows)?;
    debug!(
        rows = combined.height(),
        columns = combined.width(),
        "combined tables"
    );
    Ok(combined)
}
