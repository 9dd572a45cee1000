use std::path::PathBuf;

#[derive(Debug)]
pub struct ReshapeResult {
    pub manifest: PathBuf,
    /// Rows and columns of the loaded manifest.
    pub input_shape: (usize, usize),
    pub outputs: Vec<OutputSummary>,
    pub dry_run: bool,
}

/// One derived table and where it went.
#[derive(Debug)]
pub struct OutputSummary {
    pub name: &'static str,
    pub records: usize,
    pub columns: usize,
    /// `None` when nothing was written.
    pub path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ExportResult {
    pub records: usize,
    pub path: PathBuf,
}
