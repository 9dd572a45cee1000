//! Column projection and renaming.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use pheno_model::{CellValue, ReshapeError, Result, Table};

/// Keep every column except `column_names`, rows untouched.
///
/// Naming a column that the table does not have is a schema error rather
/// than a silent no-op. Repeated names are dropped once.
pub fn project_drop<S: AsRef<str>>(table: &Table, column_names: &[S]) -> Result<Table> {
    let mut dropped = BTreeSet::new();
    for name in column_names {
        let idx = table.require_column(name.as_ref())?;
        dropped.insert(idx);
    }

    let keep: Vec<usize> = (0..table.width())
        .filter(|idx| !dropped.contains(idx))
        .collect();
    let columns = keep.iter().map(|&idx| table.columns()[idx].clone());
    let rows: Vec<Vec<CellValue>> = table
        .rows()
        .iter()
        .map(|row| keep.iter().map(|&idx| row[idx].clone()).collect::<Vec<_>>())
        .collect();
    let projected = Table::from_rows(columns, rows)?;

    debug!(
        dropped = dropped.len(),
        remaining = projected.width(),
        rows = projected.height(),
        "dropped columns"
    );
    Ok(projected)
}

/// Rename columns per `mapping` (old name to new name).
///
/// Unmapped columns pass through. Fails when a mapped name is absent, or
/// when a new name lands on a column that keeps its own name or on another
/// renamed column. Swapping two names is allowed.
pub fn rename_columns<I, A, B>(table: &Table, mapping: I) -> Result<Table>
where
    I: IntoIterator<Item = (A, B)>,
    A: Into<String>,
    B: Into<String>,
{
    let mapping: BTreeMap<String, String> = mapping
        .into_iter()
        .map(|(from, to)| (from.into(), to.into()))
        .collect();
    for from in mapping.keys() {
        table.require_column(from)?;
    }

    let mut claimed: BTreeMap<&str, &str> = BTreeMap::new();
    for column in table.columns() {
        if !mapping.contains_key(column) {
            claimed.insert(column, column);
        }
    }
    for (from, to) in &mapping {
        if let Some(owner) = claimed.insert(to, from) {
            let from = if owner == to.as_str() { from.as_str() } else { owner };
            return Err(ReshapeError::RenameCollision {
                from: from.to_string(),
                to: to.clone(),
            });
        }
    }

    let columns = table
        .columns()
        .iter()
        .map(|column| mapping.get(column).unwrap_or(column).clone());
    Table::from_rows(columns, table.rows().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pheno_model::ErrorKind;

    fn table() -> Table {
        Table::from_rows(
            ["phenocode", "value", "variable"],
            vec![
                vec!["P1".into(), CellValue::Int(5), "n_cases_AFR".into()],
                vec!["P2".into(), CellValue::Int(3), "n_cases_AFR".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn drop_keeps_row_order() {
        let projected = project_drop(&table(), &["value"]).unwrap();
        assert_eq!(projected.columns(), &["phenocode", "variable"]);
        assert_eq!(projected.rows()[0][0], CellValue::from("P1"));
        assert_eq!(projected.rows()[1][0], CellValue::from("P2"));
    }

    #[test]
    fn drop_absent_column_is_schema_error() {
        let err = project_drop(&table(), &["value", "n_controls_AFR"]).unwrap_err();
        assert_eq!(err, ReshapeError::missing("n_controls_AFR"));
    }

    #[test]
    fn drop_nothing_is_identity() {
        let projected = project_drop::<&str>(&table(), &[]).unwrap();
        assert_eq!(projected, table());
    }

    #[test]
    fn rename_passes_through_unmapped() {
        let renamed =
            rename_columns(&table(), [("value", "n_cases"), ("variable", "population")]).unwrap();
        assert_eq!(renamed.columns(), &["phenocode", "n_cases", "population"]);
        assert_eq!(renamed.rows(), table().rows());
    }

    #[test]
    fn rename_onto_unmapped_column_collides() {
        let err = rename_columns(&table(), [("value", "phenocode")]).unwrap_err();
        assert_eq!(
            err,
            ReshapeError::RenameCollision {
                from: "value".to_string(),
                to: "phenocode".to_string(),
            }
        );
    }

    #[test]
    fn rename_two_columns_to_one_name_collides() {
        let err = rename_columns(&table(), [("value", "x"), ("variable", "x")]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn rename_swap_is_allowed() {
        let renamed = rename_columns(&table(), [("value", "variable"), ("variable", "value")])
            .unwrap();
        assert_eq!(renamed.columns(), &["phenocode", "variable", "value"]);
    }

    #[test]
    fn rename_missing_source_is_schema_error() {
        let err = rename_columns(&table(), [("coding", "code")]).unwrap_err();
        assert_eq!(err, ReshapeError::missing("coding"));
    }
}
