//! Log subscriber setup.
//!
//! Log lines go to stderr so they never mix with the command summaries on
//! stdout. Filter precedence, highest first: `-v`/`-q` flags, `RUST_LOG`,
//! `log_filter` from the configuration file, then [`DEFAULT_FILTER`].

use std::io;

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_FILTER: &str = "warn";

/// Picks the filter directives for this run.
pub fn directives(flag_level: Option<&str>, env: Option<String>, config: Option<&str>) -> String {
    if let Some(level) = flag_level {
        return format!("warn,regcover_cli={level},regcover_solver={level}");
    }
    env.filter(|value| !value.trim().is_empty())
        .or_else(|| config.map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

/// Installs the global subscriber.
///
/// Only the first call in a process has effect.
pub fn init(flag_level: Option<&str>, config: Option<&str>) -> Result<(), ParseError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = EnvFilter::try_new(directives(flag_level, env, config))?;

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let filter = directives(Some("debug"), Some("trace".into()), Some("info"));
        assert_eq!(filter, "warn,regcover_cli=debug,regcover_solver=debug");
    }

    #[test]
    fn test_env_before_config() {
        assert_eq!(directives(None, Some("trace".into()), Some("info")), "trace");
        assert_eq!(directives(None, Some("  ".into()), Some("info")), "info");
    }

    #[test]
    fn test_default() {
        assert_eq!(directives(None, None, None), DEFAULT_FILTER);
    }

    #[test]
    fn test_directives_parse() {
        assert!(EnvFilter::try_new(directives(Some("trace"), None, None)).is_ok());
    }
}
