//! End-to-end runs of the reshape and export commands on a gzipped manifest.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

use pheno_cli::cli::{ExportJsonArgs, ReshapeArgs};
use pheno_cli::commands::{run_export_json, run_reshape};

const MANIFEST: &str = "\
trait_type\tphenocode\tpheno_sex\tcoding\tmodifier\tdescription\tn_cases_full_cohort_both_sexes\tn_cases_AFR\tn_cases_EUR\tn_controls_AFR\tn_controls_EUR
continuous\t50\tboth_sexes\tNA\tirnt\tStanding height\t419596\t6636\t400000\tNA\tNA
categorical\t20004\tboth_sexes\t1095\tNA\tAppendicectomy\t23000\t45\t21000\t6500\t390000
";

fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("phenotype_manifest.tsv.bgz");
    let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    encoder.write_all(MANIFEST.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

fn reshape_args(manifest: PathBuf, output_dir: PathBuf) -> ReshapeArgs {
    ReshapeArgs {
        manifest,
        output_dir: Some(output_dir),
        prefix: "test".to_string(),
        populations: Some(vec!["AFR".to_string(), "EUR".to_string()]),
        dry_run: false,
    }
}

#[test]
fn reshape_writes_three_tables() {
    let dir = TempDir::new().unwrap();
    let manifest = write_fixture(dir.path());
    let out = dir.path().join("out");

    let result = run_reshape(&reshape_args(manifest, out.clone())).unwrap();

    assert_eq!(result.input_shape, (2, 11));
    let records: Vec<usize> = result.outputs.iter().map(|o| o.records).collect();
    assert_eq!(records, vec![4, 4, 2]);

    let cases = fs::read_to_string(out.join("test_n_cases.tsv")).unwrap();
    assert_eq!(
        cases,
        "\ttrait_type\tphenocode\tcoding\tmodifier\tpopulation\tn_cases\n\
         0\tcontinuous\t50\t\tirnt\tAFR\t6636\n\
         1\tcategorical\t20004\t1095\t\tAFR\t45\n\
         2\tcontinuous\t50\t\tirnt\tEUR\t400000\n\
         3\tcategorical\t20004\t1095\t\tEUR\t21000\n"
    );

    let controls = fs::read_to_string(out.join("test_n_controls.tsv")).unwrap();
    let first_rows: Vec<&str> = controls.lines().skip(1).take(2).collect();
    assert_eq!(
        first_rows,
        vec![
            "0\tcontinuous\t50\t\tirnt\tAFR\t",
            "1\tcategorical\t20004\t1095\t\tAFR\t6500"
        ]
    );

    let trimmed = fs::read_to_string(out.join("test_manifest.tsv")).unwrap();
    let header = trimmed.lines().next().unwrap();
    assert!(!header.contains("n_cases_AFR"));
    assert!(!header.contains("n_controls_EUR"));
    assert!(header.ends_with("n_cases_full_cohort_both_sexes"));
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let manifest = write_fixture(dir.path());
    let out = dir.path().join("out");
    let mut args = reshape_args(manifest, out.clone());
    args.dry_run = true;

    let result = run_reshape(&args).unwrap();

    assert!(result.dry_run);
    assert!(result.outputs.iter().all(|o| o.path.is_none()));
    assert!(!out.exists());
}

#[test]
fn unknown_population_reports_missing_column() {
    let dir = TempDir::new().unwrap();
    let manifest = write_fixture(dir.path());
    let mut args = reshape_args(manifest, dir.path().join("out"));
    args.populations = Some(vec!["CSA".to_string()]);

    let error = run_reshape(&args).unwrap_err();

    assert!(format!("{error:#}").contains("n_cases_CSA"));
}

#[test]
fn missing_manifest_fails() {
    let dir = TempDir::new().unwrap();
    let args = reshape_args(dir.path().join("absent.tsv.bgz"), dir.path().join("out"));
    assert!(run_reshape(&args).is_err());
}

#[test]
fn export_json_defaults_beside_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = write_fixture(dir.path());

    let result = run_export_json(&ExportJsonArgs {
        manifest,
        output: None,
    })
    .unwrap();

    assert_eq!(result.records, 2);
    assert_eq!(result.path, dir.path().join("phenotype_manifest.json"));
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&result.path).unwrap()).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["phenocode"], 50);
    assert_eq!(rows[0]["coding"], serde_json::Value::Null);
    assert_eq!(rows[1]["n_controls_EUR"], 390000);
    assert_eq!(rows[1]["description"], "Appendicectomy");
}
