use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use pheno_ingest::read_manifest;
use pheno_model::{DEFAULT_POPULATIONS, ManifestLayout, Table};
use pheno_output::{ExtractPaths, write_extracts, write_json};
use pheno_transform::build_manifest_extracts;

use crate::cli::{ExportJsonArgs, ReshapeArgs};
use crate::types::{ExportResult, OutputSummary, ReshapeResult};

const MANIFEST_SUFFIXES: [&str; 3] = [".bgz", ".gz", ".tsv"];

pub fn run_reshape(args: &ReshapeArgs) -> Result<ReshapeResult> {
    let span = info_span!("reshape", manifest = %args.manifest.display());
    let _guard = span.enter();

    let layout = match &args.populations {
        Some(populations) => ManifestLayout::default().with_populations(populations.clone()),
        None => ManifestLayout::default(),
    };
    let table = load(&args.manifest)?;

    let extracts = {
        let _stage = info_span!("transform").entered();
        build_manifest_extracts(&table, &layout).context("reshape manifest")?
    };

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| manifest_dir(&args.manifest));
    let paths = ExtractPaths::new(&output_dir, &args.prefix);
    if args.dry_run {
        info!("dry run, no files written");
    } else {
        let _stage = info_span!("output", dir = %output_dir.display()).entered();
        write_extracts(&extracts, &paths)?;
    }

    let written = |path: &PathBuf| (!args.dry_run).then(|| path.clone());
    let outputs = vec![
        OutputSummary {
            name: "n_cases",
            records: extracts.cases.height(),
            columns: extracts.cases.width(),
            path: written(&paths.cases),
        },
        OutputSummary {
            name: "n_controls",
            records: extracts.controls.height(),
            columns: extracts.controls.width(),
            path: written(&paths.controls),
        },
        OutputSummary {
            name: "manifest",
            records: extracts.trimmed.height(),
            columns: extracts.trimmed.width(),
            path: written(&paths.trimmed),
        },
    ];

    Ok(ReshapeResult {
        manifest: args.manifest.clone(),
        input_shape: (table.height(), table.width()),
        outputs,
        dry_run: args.dry_run,
    })
}

pub fn run_export_json(args: &ExportJsonArgs) -> Result<ExportResult> {
    let span = info_span!("export_json", manifest = %args.manifest.display());
    let _guard = span.enter();

    let table = load(&args.manifest)?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_json_path(&args.manifest));
    write_json(&table, &path)?;
    Ok(ExportResult {
        records: table.height(),
        path,
    })
}

/// Population codes paired with the count columns they select.
pub fn run_populations() -> Vec<(String, Vec<String>)> {
    let layout = ManifestLayout::default();
    DEFAULT_POPULATIONS
        .iter()
        .map(|population| {
            let single = layout.clone().with_populations([*population]);
            ((*population).to_string(), single.dropped_columns())
        })
        .collect()
}

fn load(path: &Path) -> Result<Table> {
    let _stage = info_span!("ingest").entered();
    let table = read_manifest(path).with_context(|| format!("read {}", path.display()))?;
    info!(rows = table.height(), columns = table.width(), "loaded manifest");
    Ok(table)
}

fn manifest_dir(manifest: &Path) -> PathBuf {
    match manifest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// `<dir>/<name without .tsv/.gz/.bgz>.json`.
pub fn default_json_path(manifest: &Path) -> PathBuf {
    let mut name = manifest
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    for suffix in MANIFEST_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            name = stripped.to_string();
        }
    }
    if name.is_empty() {
        name = pheno_output::DEFAULT_PREFIX.to_string();
    }
    manifest_dir(manifest).join(format!("{name}.json"))
}
