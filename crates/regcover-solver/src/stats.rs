//! Model size summaries.

use std::fmt;

use regcover_core::SolverGateway;

/// Size of the model loaded into a gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelStatistics {
    pub variables: usize,
    pub constraints: usize,
    pub non_zeros: usize,
}

impl ModelStatistics {
    pub fn from_gateway<G: SolverGateway + ?Sized>(gateway: &G) -> Self {
        Self {
            variables: gateway.num_variables(),
            constraints: gateway.num_constraints(),
            non_zeros: gateway.num_non_zeros(),
        }
    }
}

impl fmt::Display for ModelStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} variables, {} constraints, and {} non-zero entries",
            self.variables, self.constraints, self.non_zeros
        )
    }
}
