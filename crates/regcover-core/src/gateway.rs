//! The boundary between model construction and a MILP engine.

use crate::error::SolverError;
use crate::model::RowBlock;

/// Direction of the objective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectiveSense {
    #[default]
    Minimize,
    Maximize,
}

/// Domain of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Continuous,
    Integer,
    Binary,
}

/// An opaque mixed-integer engine that accepts a sparse linear model.
///
/// Implementations receive columns and compressed rows incrementally and
/// return a full variable assignment from [`optimize`](Self::optimize).
/// Every call is synchronous; a gateway is not shared between threads while
/// it is solving.
pub trait SolverGateway {
    /// Declares `objective.len()` new columns.
    ///
    /// `lower`, `upper` and `types` must have the same length as `objective`.
    fn add_variables(
        &mut self,
        objective: &[f64],
        lower: &[f64],
        upper: &[f64],
        types: &[VarType],
    ) -> Result<(), SolverError>;

    /// Appends all rows of `block` after the existing rows.
    fn add_constraint_rows(&mut self, block: &RowBlock) -> Result<(), SolverError>;

    fn set_objective_sense(&mut self, sense: ObjectiveSense) -> Result<(), SolverError>;

    /// Rewrites the right-hand side of an existing row.
    fn change_constraint_rhs(&mut self, row: usize, rhs: f64) -> Result<(), SolverError>;

    /// Solves the current model and returns one value per column.
    ///
    /// # Errors
    ///
    /// Fails with the engine's diagnostic on infeasibility, unboundedness or
    /// numerical trouble.
    fn optimize(&mut self) -> Result<Vec<f64>, SolverError>;

    fn num_variables(&self) -> usize;

    fn num_constraints(&self) -> usize;

    fn num_non_zeros(&self) -> usize;
}
