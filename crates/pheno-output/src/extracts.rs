//! File naming and writing for one reshape run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use pheno_model::{CASES_METRIC, CONTROLS_METRIC};
use pheno_transform::ManifestExtracts;

use crate::tsv::write_tsv;

/// Default file name prefix for reshape outputs.
pub const DEFAULT_PREFIX: &str = "phenotype_manifest";

/// Destination of each derived table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractPaths {
    pub cases: PathBuf,
    pub controls: PathBuf,
    pub trimmed: PathBuf,
}

impl ExtractPaths {
    /// `<dir>/<prefix>_n_cases.tsv`, `<dir>/<prefix>_n_controls.tsv`,
    /// `<dir>/<prefix>_manifest.tsv`.
    pub fn new(output_dir: &Path, prefix: &str) -> Self {
        Self {
            cases: output_dir.join(format!("{prefix}_{CASES_METRIC}.tsv")),
            controls: output_dir.join(format!("{prefix}_{CONTROLS_METRIC}.tsv")),
            trimmed: output_dir.join(format!("{prefix}_manifest.tsv")),
        }
    }
}

/// Write all three extracts. Stops at the first failure.
pub fn write_extracts(extracts: &ManifestExtracts, paths: &ExtractPaths) -> Result<()> {
    write_tsv(&extracts.cases, &paths.cases).context("write case counts")?;
    write_tsv(&extracts.controls, &paths.controls).context("write control counts")?;
    write_tsv(&extracts.trimmed, &paths.trimmed).context("write trimmed manifest")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_prefix() {
        let paths = ExtractPaths::new(Path::new("out"), "200819");
        assert_eq!(paths.cases, Path::new("out/200819_n_cases.tsv"));
        assert_eq!(paths.controls, Path::new("out/200819_n_controls.tsv"));
        assert_eq!(paths.trimmed, Path::new("out/200819_manifest.tsv"));
    }
}
