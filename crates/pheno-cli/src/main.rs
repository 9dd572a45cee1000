//! Phenotype manifest reshaper CLI.

use clap::Parser;

use pheno_cli::cli::{Cli, Command};
use pheno_cli::commands::{run_export_json, run_populations, run_reshape};
use pheno_cli::logging::init_logging;

mod summary;

use crate::summary::{print_export, print_populations, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Reshape(args) => match run_reshape(&args) {
            Ok(result) => {
                print_summary(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::ExportJson(args) => match run_export_json(&args) {
            Ok(result) => {
                print_export(&result);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Populations => {
            print_populations(&run_populations());
            0
        }
    };
    std::process::exit(exit_code);
}
