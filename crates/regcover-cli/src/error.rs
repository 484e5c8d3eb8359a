//! CLI errors and process exit codes.

use clap::error::ErrorKind;
use regcover_config::ConfigError;
use regcover_core::RegcoverError;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;

use crate::mappings::MappingError;
use crate::output::OutputError;

/// Process exit codes, one per failure class.
pub mod exit_code {
    /// Usage error, unreadable mapping file or bad configuration.
    pub const USAGE: u8 = 255;
    pub const UNKNOWN_COMMAND: u8 = 254;
    pub const MISSING_ARGUMENTS: u8 = 253;
    pub const INVALID_NUMBER: u8 = 252;
    /// Budget or weight outside its valid range.
    pub const INVALID_PARAMETER: u8 = 250;
    pub const SOLVER: u8 = 249;
    pub const WRITE_LIST: u8 = 248;
    pub const WRITE_CURVE: u8 = 247;
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] ParseError),

    #[error(transparent)]
    Mappings(#[from] MappingError),

    #[error("Could not convert '{0}' to a number")]
    InvalidNumber(String),

    #[error(transparent)]
    Cover(#[from] RegcoverError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::LogFilter(_) | CliError::Mappings(_) => {
                exit_code::USAGE
            }
            CliError::InvalidNumber(_) => exit_code::INVALID_NUMBER,
            CliError::Cover(RegcoverError::Config(_)) => exit_code::INVALID_PARAMETER,
            CliError::Cover(_) => exit_code::SOLVER,
            CliError::Output(OutputError::Curve { .. }) => exit_code::WRITE_CURVE,
            CliError::Output(_) => exit_code::WRITE_LIST,
        }
    }
}

/// Exit code for an argument parsing failure. Help and version output exit
/// successfully.
pub fn clap_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        ErrorKind::InvalidSubcommand => exit_code::UNKNOWN_COMMAND,
        ErrorKind::MissingRequiredArgument => exit_code::MISSING_ARGUMENTS,
        _ => exit_code::USAGE,
    }
}
