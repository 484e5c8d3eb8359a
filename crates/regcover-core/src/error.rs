//! Error types for regcover

use thiserror::Error;

/// Failure reported by a MILP engine behind a [`SolverGateway`](crate::SolverGateway).
///
/// Carries the engine's own diagnostic text. Infeasibility is not transient,
/// so callers should not retry on this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SolverError {
    message: String,
}

impl SolverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The diagnostic supplied by the engine.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Main error type for regcover operations
#[derive(Debug, Error)]
pub enum RegcoverError {
    /// Invalid user-supplied parameter (budget, weights)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A model construction invariant was violated
    #[error("Model construction error: {0}")]
    ModelConstruction(String),

    /// The solver engine failed
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// Invalid operation for the current state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for regcover operations
pub type Result<T> = std::result::Result<T, RegcoverError>;
