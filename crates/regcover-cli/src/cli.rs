//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "regcover")]
#[command(version)]
#[command(about = "Computes optimal regulator/target covers with integer programming")]
pub struct Cli {
    /// Configuration file (TOML, or YAML by extension). Defaults to
    /// `regcover.toml` in the working directory when present.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the built model in LP format before solving
    #[arg(long, global = true, value_name = "FILE")]
    pub write_lp: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log level requested on the command line, if any.
    pub fn log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Maximize weighted target coverage minus weighted regulator usage
    Minmax {
        mappings: PathBuf,
        /// Cost of selecting one regulator
        #[arg(allow_negative_numbers = true)]
        regulator_weight: String,
        /// Reward for covering one target
        #[arg(allow_negative_numbers = true)]
        target_weight: String,
        out_regulators: PathBuf,
        out_targets: PathBuf,
    },

    /// Maximize the number of targets covered by exactly `budget` regulators
    Maxgene {
        mappings: PathBuf,
        #[arg(allow_negative_numbers = true)]
        budget: String,
        out_regulators: PathBuf,
        out_targets: PathBuf,
    },

    /// Write the best coverage for every budget, one `budget<TAB>covered` line each
    MaxgeneCurve {
        mappings: PathBuf,
        out_curve: PathBuf,
    },

    /// Not yet implemented
    Minmirna {
        mappings: PathBuf,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<String>,
    },

    /// Not yet implemented
    MinmirnaCurve {
        mappings: PathBuf,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<String>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Minmax { .. } => "minmax",
            Command::Maxgene { .. } => "maxgene",
            Command::MaxgeneCurve { .. } => "maxgene-curve",
            Command::Minmirna { .. } => "minmirna",
            Command::MinmirnaCurve { .. } => "minmirna-curve",
        }
    }
}
