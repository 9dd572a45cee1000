//! Phenotype manifest data model.
//!
//! Shared by every stage of the reshaping pipeline: the [`Table`] row model,
//! the [`ManifestLayout`] describing which columns hold what, and the
//! [`ReshapeError`] taxonomy.

pub mod error;
pub mod layout;
pub mod table;

pub use error::{ErrorKind, ReshapeError, Result};
pub use layout::{
    CASES_METRIC, CONTROLS_METRIC, DEFAULT_POPULATIONS, FULL_COHORT_CASE_COLUMNS, ID_COLUMNS,
    ManifestLayout, POPULATION_COLUMN,
};
pub use table::{CellValue, Record, Table, format_float};
