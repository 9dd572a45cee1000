//! Column layout of the pan-ancestry phenotype manifest.

/// Columns that together identify one phenotype record.
pub const ID_COLUMNS: [&str; 4] = ["trait_type", "phenocode", "coding", "modifier"];

/// Ancestry groups with per-population summary columns in the manifest.
pub const DEFAULT_POPULATIONS: [&str; 6] = ["AFR", "AMR", "CSA", "EAS", "EUR", "MID"];

/// Name of the column holding the extracted population code in long tables.
pub const POPULATION_COLUMN: &str = "population";

pub const CASES_METRIC: &str = "n_cases";
pub const CONTROLS_METRIC: &str = "n_controls";

/// Aggregate case counts that are not per-population and stay in the manifest.
pub const FULL_COHORT_CASE_COLUMNS: [&str; 3] = [
    "n_cases_full_cohort_both_sexes",
    "n_cases_full_cohort_males",
    "n_cases_full_cohort_females",
];

/// Where population codes live inside wide column names and which ones to reshape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLayout {
    pub id_columns: Vec<String>,
    pub populations: Vec<String>,
    /// Separator between the metric and the population code.
    pub separator: String,
    /// Segment index of the population code after splitting on `separator`.
    pub population_index: usize,
}

impl Default for ManifestLayout {
    fn default() -> Self {
        Self {
            id_columns: ID_COLUMNS.iter().map(|s| (*s).to_string()).collect(),
            populations: DEFAULT_POPULATIONS.iter().map(|s| (*s).to_string()).collect(),
            separator: "_".to_string(),
            population_index: 2,
        }
    }
}

impl ManifestLayout {
    /// Replace the population codes, keeping everything else.
    #[must_use]
    pub fn with_populations<I, S>(mut self, populations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.populations = populations.into_iter().map(Into::into).collect();
        self
    }

    /// Wide column names for `metric`, one per population, in population order.
    pub fn metric_columns(&self, metric: &str) -> Vec<String> {
        self.populations
            .iter()
            .map(|pop| format!("{metric}{}{pop}", self.separator))
            .collect()
    }

    pub fn case_columns(&self) -> Vec<String> {
        self.metric_columns(CASES_METRIC)
    }

    pub fn control_columns(&self) -> Vec<String> {
        self.metric_columns(CONTROLS_METRIC)
    }

    /// Columns removed from the trimmed manifest: every per-population
    /// count column that the long tables carry instead.
    pub fn dropped_columns(&self) -> Vec<String> {
        let mut columns = self.case_columns();
        columns.extend(self.control_columns());
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_manifest() {
        let layout = ManifestLayout::default();
        assert_eq!(layout.id_columns, ID_COLUMNS);
        assert_eq!(layout.case_columns()[0], "n_cases_AFR");
        assert_eq!(layout.control_columns()[5], "n_controls_MID");
        assert_eq!(layout.dropped_columns().len(), 12);
    }

    #[test]
    fn full_cohort_columns_are_never_dropped() {
        let dropped = ManifestLayout::default().dropped_columns();
        for column in FULL_COHORT_CASE_COLUMNS {
            assert!(!dropped.iter().any(|name| name == column));
        }
    }

    #[test]
    fn with_populations_overrides_codes() {
        let layout = ManifestLayout::default().with_populations(["EUR"]);
        assert_eq!(layout.case_columns(), vec!["n_cases_EUR".to_string()]);
        assert_eq!(layout.separator, "_");
    }
}
