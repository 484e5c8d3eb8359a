//! Configuration system for regcover.
//!
//! Load run configuration from TOML or YAML files to control logging, the
//! coverage curve scan and model export without changing command lines.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use regcover_config::CoverConfig;
//!
//! let config = CoverConfig::from_toml_str(r#"
//!     log_filter = "regcover_solver=debug"
//!
//!     [curve]
//!     shortcut_on_full_coverage = false
//!     max_budget = 25
//!
//!     [export]
//!     lp_file = "model.lp"
//! "#).unwrap();
//!
//! assert_eq!(config.curve.max_budget, Some(25));
//! assert!(!config.curve.shortcut_on_full_coverage);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use regcover_config::CoverConfig;
//!
//! let config = CoverConfig::load("regcover.toml").unwrap_or_default();
//! assert!(config.curve.shortcut_on_full_coverage);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main run configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct CoverConfig {
    /// `tracing` filter directives, e.g. `"regcover_solver=debug"`.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Coverage curve scan configuration.
    #[serde(default)]
    pub curve: CurveConfig,

    /// Model export configuration.
    #[serde(default)]
    pub export: ExportConfig,
}

impl CoverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format from the extension.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or holds
    /// values rejected by [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path)?,
            _ => Self::from_toml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::Invalid("log_filter must not be empty".into()));
            }
        }
        if self.curve.max_budget == Some(0) {
            return Err(ConfigError::Invalid(
                "curve.max_budget must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Sets the logging filter directives.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Caps the largest budget the curve scan visits.
    pub fn with_max_budget(mut self, max_budget: usize) -> Self {
        self.curve.max_budget = Some(max_budget);
        self
    }

    /// Sets the path the built model is written to before solving.
    pub fn with_lp_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.export.lp_file = Some(path.into());
        self
    }
}

/// Coverage curve scan configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct CurveConfig {
    /// Stop solving once every target is covered and fill the remaining
    /// budgets with the full target count.
    #[serde(default = "default_true")]
    pub shortcut_on_full_coverage: bool,

    /// Largest budget to visit. Defaults to the number of regulators.
    #[serde(default)]
    pub max_budget: Option<usize>,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            shortcut_on_full_coverage: true,
            max_budget: None,
        }
    }
}

/// Model export configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct ExportConfig {
    /// Write the built model in LP format to this path before solving.
    pub lp_file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}
