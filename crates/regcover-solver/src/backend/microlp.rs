//! `microlp` backend.

use good_lp::{
    microlp, variable, Expression, ProblemVariables, Solution, SolverModel, Variable,
    VariableDefinition,
};
use regcover_core::{
    Column, ObjectiveSense, RowBlock, RowSense, SolverError, SolverGateway, SparseModel, VarType,
};
use tracing::debug;

const FEASIBILITY_TOLERANCE: f64 = 1e-9;

/// A [`SolverGateway`] backed by `good_lp`'s `microlp` branch-and-bound.
///
/// `good_lp` models are consumed by solving, so the gateway buffers columns
/// and rows in a [`SparseModel`] and builds a fresh engine problem on every
/// [`optimize`](SolverGateway::optimize). Right-hand side changes therefore
/// apply to the buffer in place.
#[derive(Debug, Clone, Default)]
pub struct MicrolpGateway {
    model: SparseModel,
}

impl MicrolpGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffered model.
    pub fn model(&self) -> &SparseModel {
        &self.model
    }
}

fn definition(column: &Column) -> VariableDefinition {
    let def = variable().min(column.lower).max(column.upper);
    match column.var_type {
        VarType::Continuous => def,
        VarType::Integer => def.integer(),
        VarType::Binary => def.binary(),
    }
}

fn linear(entries: impl Iterator<Item = (usize, f64)>, vars: &[Variable]) -> Expression {
    let mut expr = Expression::default();
    for (column, coefficient) in entries {
        expr.add_mul(coefficient, vars[column]);
    }
    expr
}

impl SolverGateway for MicrolpGateway {
    fn add_variables(
        &mut self,
        objective: &[f64],
        lower: &[f64],
        upper: &[f64],
        types: &[VarType],
    ) -> Result<(), SolverError> {
        self.model.add_columns(objective, lower, upper, types)
    }

    fn add_constraint_rows(&mut self, block: &RowBlock) -> Result<(), SolverError> {
        self.model.add_rows(block)
    }

    fn set_objective_sense(&mut self, sense: ObjectiveSense) -> Result<(), SolverError> {
        self.model.set_sense(sense);
        Ok(())
    }

    fn change_constraint_rhs(&mut self, row: usize, rhs: f64) -> Result<(), SolverError> {
        self.model.change_rhs(row, rhs)
    }

    fn optimize(&mut self) -> Result<Vec<f64>, SolverError> {
        // microlp needs at least one variable; a column-free model is either
        // trivially feasible or has a constant row that cannot hold.
        if self.model.num_columns() == 0 {
            return if self.model.is_feasible(&[], FEASIBILITY_TOLERANCE) {
                Ok(Vec::new())
            } else {
                Err(SolverError::new(
                    "infeasible: constant constraint row cannot be satisfied",
                ))
            };
        }

        let mut problem = ProblemVariables::new();
        let vars: Vec<Variable> = self
            .model
            .columns()
            .iter()
            .map(|column| problem.add(definition(column)))
            .collect();

        let objective = linear(
            self.model
                .columns()
                .iter()
                .enumerate()
                .map(|(index, column)| (index, column.objective)),
            &vars,
        );
        let mut solver = match self.model.sense() {
            ObjectiveSense::Maximize => problem.maximise(objective),
            ObjectiveSense::Minimize => problem.minimise(objective),
        }
        .using(microlp);

        for row in self.model.rows().rows() {
            let lhs = linear(row.entries(), &vars);
            let constraint = match row.sense {
                RowSense::GreaterEqual => lhs.geq(row.rhs),
                RowSense::LessEqual => lhs.leq(row.rhs),
                RowSense::Equal => lhs.eq(row.rhs),
            };
            solver.add_constraint(constraint);
        }

        debug!(
            event = "microlp_solve",
            variables = self.model.num_columns(),
            constraints = self.model.num_rows(),
        );
        let solution = solver
            .solve()
            .map_err(|err| SolverError::new(format!("microlp: {err}")))?;
        Ok(vars.iter().map(|&var| solution.value(var)).collect())
    }

    fn num_variables(&self) -> usize {
        self.model.num_columns()
    }

    fn num_constraints(&self) -> usize {
        self.model.num_rows()
    }

    fn num_non_zeros(&self) -> usize {
        self.model.num_non_zeros()
    }
}
