//! Population code extraction from wide column names.

use pheno_model::{ManifestLayout, ReshapeError, Result};

/// Splits `column_name` on `separator` and returns the segment at `index`.
///
/// # Examples
///
/// ```
/// use pheno_transform::extract_population_code;
///
/// assert_eq!(extract_population_code("n_cases_AFR", "_", 2).unwrap(), "AFR");
/// assert_eq!(extract_population_code("n_controls_EUR", "_", 2).unwrap(), "EUR");
/// assert!(extract_population_code("n_cases", "_", 2).is_err());
/// ```
pub fn extract_population_code(column_name: &str, separator: &str, index: usize) -> Result<String> {
    column_name
        .split(separator)
        .nth(index)
        .map(str::to_string)
        .ok_or_else(|| ReshapeError::Format {
            column: column_name.to_string(),
            separator: separator.to_string(),
            index,
        })
}

/// A configured [`extract_population_code`] call, usable wherever a
/// population extractor function is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationExtractor {
    separator: String,
    index: usize,
}

impl PopulationExtractor {
    pub fn new(separator: impl Into<String>, index: usize) -> Self {
        Self {
            separator: separator.into(),
            index,
        }
    }

    pub fn from_layout(layout: &ManifestLayout) -> Self {
        Self::new(layout.separator.clone(), layout.population_index)
    }

    pub fn extract(&self, column_name: &str) -> Result<String> {
        extract_population_code(column_name, &self.separator, self.index)
    }

    /// Borrow as a closure for [`crate::melt_population_metric`].
    pub fn as_fn(&self) -> impl Fn(&str) -> Result<String> + '_ {
        move |column| self.extract(column)
    }
}

impl Default for PopulationExtractor {
    fn default() -> Self {
        Self::from_layout(&ManifestLayout::default())
    }
}
