//! `regcover` - optimal regulator/target covers from the command line.
//!
//! ```text
//! regcover minmax <mappings> <regulator_weight> <target_weight> <out_regulators> <out_targets>
//! regcover maxgene <mappings> <budget> <out_regulators> <out_targets>
//! regcover maxgene-curve <mappings> <out_curve>
//! ```
//!
//! Summaries go to stdout, logs and errors to stderr. Each failure class has
//! its own exit code, see [`error::exit_code`].

mod cli;
mod commands;
mod error;
mod logging;
mod mappings;
mod output;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use regcover_config::CoverConfig;

use cli::Cli;
use error::{clap_exit_code, CliError};

/// Configuration file picked up from the working directory when `--config`
/// is not given.
const DEFAULT_CONFIG_FILE: &str = "regcover.toml";

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(clap_exit_code(err.kind()));
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(path) = cli.write_lp.clone() {
        config = config.with_lp_file(path);
    }
    logging::init(cli.log_level(), config.log_filter.as_deref())?;

    commands::run(cli.command, &config)
}

fn load_config(path: Option<&Path>) -> Result<CoverConfig, CliError> {
    match path {
        Some(path) => Ok(CoverConfig::load(path)?),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            Ok(CoverConfig::load(DEFAULT_CONFIG_FILE)?)
        }
        None => Ok(CoverConfig::default()),
    }
}
