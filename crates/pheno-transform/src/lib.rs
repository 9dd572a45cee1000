//! Phenotype manifest reshaping.
//!
//! Pure functions from input tables to freshly allocated output tables:
//!
//! - **melt**: wide-to-long unpivot of per-population columns, and explicit
//!   row concatenation
//! - **population**: population code extraction from wide column names
//! - **project**: column dropping and renaming
//! - **extracts**: the cases / controls / trimmed-manifest set built per run
//!
//! # Example
//!
//! ```ignore
//! use pheno_model::ManifestLayout;
//! use pheno_transform::build_manifest_extracts;
//!
//! let extracts = build_manifest_extracts(&manifest, &ManifestLayout::default())?;
//! assert_eq!(extracts.cases.height(), manifest.height() * 6);
//! ```

pub mod extracts;
pub mod melt;
pub mod population;
pub mod project;

pub use extracts::{ManifestExtracts, build_manifest_extracts, melt_metric};
pub use melt::{combine_tables, melt_population_metric};
pub use population::{PopulationExtractor, extract_population_code};
pub use project::{project_drop, rename_columns};
