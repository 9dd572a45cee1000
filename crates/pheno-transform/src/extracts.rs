//! The fixed set of derived tables produced from one manifest.

use tracing::{debug, info_span};

use pheno_model::{CASES_METRIC, CONTROLS_METRIC, ManifestLayout, Result, Table};

use crate::melt::{combine_tables, melt_population_metric};
use crate::population::PopulationExtractor;
use crate::project::project_drop;

/// Derived tables written by one reshape run.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestExtracts {
    /// Identifier columns, `population`, `n_cases`.
    pub cases: Table,
    /// Identifier columns, `population`, `n_controls`.
    pub controls: Table,
    /// The manifest without its per-population count columns.
    pub trimmed: Table,
}

/// Melt one metric population by population and stack the results.
///
/// Each population is melted on its own and appended in layout order,
/// which yields the same rows as a single melt over every column.
pub fn melt_metric(table: &Table, layout: &ManifestLayout, metric: &str) -> Result<Table> {
    let extractor = PopulationExtractor::from_layout(layout);
    let parts = layout
        .metric_columns(metric)
        .into_iter()
        .map(|column| {
            melt_population_metric(
                table,
                layout.id_columns.as_slice(),
                std::slice::from_ref(&column),
                extractor.as_fn(),
                metric,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    if parts.is_empty() {
        return melt_population_metric::<_, &str, _>(
            table,
            layout.id_columns.as_slice(),
            &[],
            extractor.as_fn(),
            metric,
        );
    }
    combine_tables(parts)
}

/// Build the cases, controls, and trimmed manifest tables.
pub fn build_manifest_extracts(table: &Table, layout: &ManifestLayout) -> Result<ManifestExtracts> {
    let span = info_span!("reshape", rows = table.height(), columns = table.width());
    let _guard = span.enter();

    let cases = melt_metric(table, layout, CASES_METRIC)?;
    let controls = melt_metric(table, layout, CONTROLS_METRIC)?;
    let trimmed = project_drop(table, &layout.dropped_columns())?;

    debug!(
        cases = cases.height(),
        controls = controls.height(),
        trimmed_columns = trimmed.width(),
        "built manifest extracts"
    );
    Ok(ManifestExtracts {
        cases,
        controls,
        trimmed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pheno_model::{CellValue, ErrorKind};

    fn manifest() -> Table {
        let layout = ManifestLayout::default().with_populations(["AFR", "EUR"]);
        let mut columns: Vec<String> = layout.id_columns.clone();
        columns.push("description".to_string());
        columns.extend(layout.dropped_columns());
        Table::from_rows(
            columns,
            vec![
                vec![
                    "continuous".into(),
                    CellValue::Int(50),
                    CellValue::Null,
                    "irnt".into(),
                    "Standing height".into(),
                    CellValue::Int(10),
                    CellValue::Int(20),
                    CellValue::Null,
                    CellValue::Null,
                ],
                vec![
                    "categorical".into(),
                    CellValue::Int(1747),
                    CellValue::Int(1),
                    CellValue::Null,
                    "Hair colour".into(),
                    CellValue::Int(11),
                    CellValue::Int(21),
                    CellValue::Int(31),
                    CellValue::Int(41),
                ],
            ],
        )
        .unwrap()
    }

    #[test]
    fn extracts_cover_every_population() {
        let layout = ManifestLayout::default().with_populations(["AFR", "EUR"]);
        let extracts = build_manifest_extracts(&manifest(), &layout).unwrap();

        assert_eq!(extracts.cases.height(), 4);
        assert_eq!(extracts.controls.height(), 4);
        assert_eq!(
            extracts.cases.columns(),
            &["trait_type", "phenocode", "coding", "modifier", "population", "n_cases"]
        );
        assert_eq!(extracts.controls.value(3, "n_controls"), Some(&CellValue::Int(41)));
        assert_eq!(extracts.controls.value(3, "population"), Some(&CellValue::from("EUR")));
        assert_eq!(
            extracts.trimmed.columns(),
            &["trait_type", "phenocode", "coding", "modifier", "description"]
        );
    }

    #[test]
    fn missing_population_column_fails() {
        let layout = ManifestLayout::default();
        let err = build_manifest_extracts(&manifest(), &layout).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
    }

    #[test]
    fn empty_population_list_yields_empty_long_tables() {
        let layout = ManifestLayout::default().with_populations(Vec::<String>::new());
        let cases = melt_metric(&manifest(), &layout, CASES_METRIC).unwrap();
        assert_eq!(cases.height(), 0);
        assert_eq!(cases.width(), 6);
    }
}
