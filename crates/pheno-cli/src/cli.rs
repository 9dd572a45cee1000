//! CLI argument definitions for the manifest reshaper.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "pheno-reshape",
    version,
    about = "Reshape the pan-ancestry phenotype manifest",
    long_about = "Reshape the pan-ancestry phenotype manifest.\n\n\
                  Melts per-population case and control counts into long tables,\n\
                  writes the manifest without those columns, and exports JSON records."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in each log line.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

impl Cli {
    /// Logging configuration from the global flags.
    ///
    /// `--log-level` beats `-v/-q`; `RUST_LOG` applies only when neither is given.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig::default()
            .with_level_filter(level_filter)
            .with_env_filter(!(self.verbosity.is_present() || self.log_level.is_some()))
            .with_format(format)
            .with_timestamps(self.log_timestamps)
            .with_target(self.log_target)
            .with_ansi(with_ansi)
            .with_log_file(self.log_file.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Write long case/control count tables and the trimmed manifest.
    Reshape(ReshapeArgs),

    /// Export the whole manifest as JSON records.
    ExportJson(ExportJsonArgs),

    /// List the default population codes and their count columns.
    Populations,
}

#[derive(Parser)]
pub struct ReshapeArgs {
    /// Path to the manifest (gzip, block-gzip, or plain TSV).
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Output directory for generated files (default: the manifest's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// File name prefix for the generated tables.
    #[arg(long = "prefix", value_name = "NAME", default_value = pheno_output::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Population codes to reshape, comma separated.
    #[arg(long = "populations", value_name = "CODES", value_delimiter = ',')]
    pub populations: Option<Vec<String>>,

    /// Build the tables and report without writing files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ExportJsonArgs {
    /// Path to the manifest (gzip, block-gzip, or plain TSV).
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Destination file (default: beside the manifest with a `.json` suffix).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pheno-reshape").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_defer_to_rust_log() {
        let config = parse(&["populations"]).log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.with_timestamps);
        assert!(!config.with_target);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn log_flags_reach_config() {
        let config = parse(&[
            "reshape",
            "manifest.tsv.bgz",
            "--log-timestamps",
            "--log-target",
            "--log-format",
            "json",
            "--log-level",
            "debug",
            "--color",
            "never",
        ])
        .log_config();
        assert!(config.with_timestamps);
        assert!(config.with_target);
        assert!(!config.with_ansi);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
    }

    #[test]
    fn verbosity_flag_disables_env_filter() {
        let config = parse(&["-v", "populations"]).log_config();
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert!(!config.use_env_filter);
    }

    #[test]
    fn populations_split_on_commas() {
        let cli = parse(&["reshape", "m.tsv", "--populations", "AFR,EUR"]);
        let Command::Reshape(args) = cli.command else {
            panic!("expected reshape");
        };
        assert_eq!(args.populations, Some(vec!["AFR".to_string(), "EUR".to_string()]));
        assert_eq!(args.prefix, pheno_output::DEFAULT_PREFIX);
    }
}
