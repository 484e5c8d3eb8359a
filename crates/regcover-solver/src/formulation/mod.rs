//! The two covering formulations.
//!
//! Both variants share one variable layout (regulator columns first, then
//! target columns, all binary), the coverage rows from
//! [`compile_coverage_rows`](crate::compile_coverage_rows) and a maximizing
//! objective. [`FormulationKind`] supplies what differs: the objective
//! coefficients and any rows placed ahead of the coverage rows.

use regcover_core::{
    ObjectiveSense, RegcoverError, RelationStore, Result, RowBlock, RowSense, SolverGateway,
    VarType,
};
use tracing::info;

use crate::backend::{write_lp, MicrolpGateway};
use crate::compiler::compile_coverage_rows;
use crate::decoder::{decode, Selection};
use crate::stats::ModelStatistics;

/// Row index of the budget constraint in a cardinality-constrained model.
const BUDGET_ROW: usize = 0;

/// Objective weights of the weighted selection model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    regulator: f64,
    target: f64,
}

impl Weights {
    /// Creates weights, rejecting negative or non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`RegcoverError::Config`] if either weight is NaN, infinite or
    /// negative.
    pub fn new(regulator: f64, target: f64) -> Result<Self> {
        for (name, value) in [("regulator", regulator), ("target", target)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RegcoverError::Config(format!(
                    "{name} weight must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(Self { regulator, target })
    }

    pub fn regulator(&self) -> f64 {
        self.regulator
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            regulator: 1.0,
            target: 1.0,
        }
    }
}

/// Which covering model to build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormulationKind {
    /// Maximize `target * covered - regulator * selected`.
    WeightedSelection(Weights),
    /// Maximize covered targets using exactly `budget` regulators.
    CardinalityConstrained { budget: usize },
}

impl FormulationKind {
    /// Short name used in logs and command output.
    pub fn name(&self) -> &'static str {
        match self {
            FormulationKind::WeightedSelection(_) => "MinMax",
            FormulationKind::CardinalityConstrained { .. } => "MaxGene",
        }
    }

    /// Objective coefficient for every column of `store`.
    pub fn objective(&self, store: &RelationStore) -> Vec<f64> {
        let (regulator, target) = match self {
            FormulationKind::WeightedSelection(weights) => (-weights.regulator, weights.target),
            FormulationKind::CardinalityConstrained { .. } => (0.0, 1.0),
        };
        let mut objective = vec![regulator; store.num_regulators()];
        objective.resize(store.num_regulators() + store.num_targets(), target);
        objective
    }

    /// Rows that precede the coverage rows, if any.
    ///
    /// The cardinality variant places its budget row `sum(x[r]) == budget` at
    /// row index 0 so that [`Formulation::set_budget`] can address it.
    pub fn side_constraints(&self, store: &RelationStore) -> Option<RowBlock> {
        match self {
            FormulationKind::WeightedSelection(_) => None,
            FormulationKind::CardinalityConstrained { budget } => Some(RowBlock::single(
                *budget as f64,
                RowSense::Equal,
                (0..store.num_regulators()).map(|column| (column, 1.0)),
            )),
        }
    }
}

/// A covering model loaded into a solver gateway.
///
/// The model is built completely on construction. Afterwards only the budget
/// of a cardinality-constrained model can change.
///
/// # Examples
///
/// ```
/// use regcover_core::RelationStore;
/// use regcover_solver::{Formulation, MicrolpGateway};
///
/// let mut store = RelationStore::new();
/// store.add("r1", "t1").unwrap();
/// store.add("r1", "t2").unwrap();
/// store.add("r2", "t2").unwrap();
///
/// let mut formulation =
///     Formulation::cardinality_constrained(store, MicrolpGateway::new(), 1).unwrap();
/// let selection = formulation.solve().unwrap();
///
/// assert_eq!(selection.regulators, vec!["r1"]);
/// assert_eq!(selection.targets, vec!["t1", "t2"]);
/// ```
#[derive(Debug)]
pub struct Formulation<G: SolverGateway> {
    store: RelationStore,
    gateway: G,
    kind: FormulationKind,
}

impl<G: SolverGateway> Formulation<G> {
    /// Finalizes `store` and loads the model described by `kind` into
    /// `gateway`.
    ///
    /// # Errors
    ///
    /// Returns [`RegcoverError::Config`] if a budget exceeds the number of
    /// regulators, [`RegcoverError::Solver`] if the gateway rejects the model,
    /// and [`RegcoverError::ModelConstruction`] if the loaded model does not
    /// have the expected shape.
    pub fn new(mut store: RelationStore, gateway: G, kind: FormulationKind) -> Result<Self> {
        store.finalize();
        if let FormulationKind::CardinalityConstrained { budget } = kind {
            check_budget(budget, store.num_regulators())?;
        }

        let mut formulation = Self {
            store,
            gateway,
            kind,
        };
        formulation.build_model()?;
        Ok(formulation)
    }

    pub fn weighted_selection(store: RelationStore, gateway: G, weights: Weights) -> Result<Self> {
        Self::new(store, gateway, FormulationKind::WeightedSelection(weights))
    }

    pub fn cardinality_constrained(
        store: RelationStore,
        gateway: G,
        budget: usize,
    ) -> Result<Self> {
        Self::new(store, gateway, FormulationKind::CardinalityConstrained { budget })
    }

    fn build_model(&mut self) -> Result<()> {
        let num_columns = self.store.num_regulators() + self.store.num_targets();
        let objective = self.kind.objective(&self.store);
        self.gateway.add_variables(
            &objective,
            &vec![0.0; num_columns],
            &vec![1.0; num_columns],
            &vec![VarType::Binary; num_columns],
        )?;

        let side_rows = self.kind.side_constraints(&self.store);
        if let Some(rows) = &side_rows {
            self.gateway.add_constraint_rows(rows)?;
        }
        let coverage_rows = compile_coverage_rows(&self.store)?;
        self.gateway.add_constraint_rows(&coverage_rows)?;
        self.gateway.set_objective_sense(ObjectiveSense::Maximize)?;

        let expected_rows =
            coverage_rows.num_rows() + side_rows.as_ref().map_or(0, RowBlock::num_rows);
        let stats = self.statistics();
        if stats.variables != num_columns || stats.constraints != expected_rows {
            return Err(RegcoverError::ModelConstruction(format!(
                "gateway holds {} variables and {} constraints, expected {} and {}",
                stats.variables, stats.constraints, num_columns, expected_rows
            )));
        }

        info!(
            event = "model_built",
            formulation = self.kind.name(),
            regulators = self.store.num_regulators(),
            targets = self.store.num_targets(),
            mappings = self.store.num_mappings(),
            variables = stats.variables,
            constraints = stats.constraints,
            non_zeros = stats.non_zeros,
        );
        Ok(())
    }

    /// Changes the regulator budget of a cardinality-constrained model.
    ///
    /// Only the right-hand side of the budget row is rewritten; the rest of
    /// the model stays loaded in the gateway.
    ///
    /// # Errors
    ///
    /// Returns [`RegcoverError::InvalidState`] for a weighted selection model
    /// and [`RegcoverError::Config`] if `budget` exceeds the number of
    /// regulators.
    pub fn set_budget(&mut self, budget: usize) -> Result<()> {
        if self.budget().is_none() {
            return Err(RegcoverError::InvalidState(format!(
                "{} formulation has no regulator budget",
                self.kind.name()
            )));
        }
        check_budget(budget, self.store.num_regulators())?;
        self.gateway
            .change_constraint_rhs(BUDGET_ROW, budget as f64)?;
        self.kind = FormulationKind::CardinalityConstrained { budget };
        Ok(())
    }

    /// Current regulator budget, if this is a cardinality-constrained model.
    pub fn budget(&self) -> Option<usize> {
        match self.kind {
            FormulationKind::CardinalityConstrained { budget } => Some(budget),
            FormulationKind::WeightedSelection(_) => None,
        }
    }

    /// Solves the loaded model and decodes the assignment.
    ///
    /// # Errors
    ///
    /// Engine failures are returned as [`RegcoverError::Solver`] without
    /// retrying.
    pub fn solve(&mut self) -> Result<Selection> {
        info!(
            event = "solve_start",
            formulation = self.kind.name(),
            budget = ?self.budget(),
        );
        let values = self.gateway.optimize()?;
        let selection = decode(&self.store, &values)?;
        info!(
            event = "solve_end",
            formulation = self.kind.name(),
            regulators = selection.regulators.len(),
            targets = selection.coverage(),
        );
        Ok(selection)
    }

    pub fn statistics(&self) -> ModelStatistics {
        ModelStatistics::from_gateway(&self.gateway)
    }

    pub fn store(&self) -> &RelationStore {
        &self.store
    }

    pub fn kind(&self) -> &FormulationKind {
        &self.kind
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// LP-file name of a column: `r<id>` for regulators, `t<id>` for targets.
    pub fn column_label(&self, column: usize) -> String {
        let num_regulators = self.store.num_regulators();
        if column < num_regulators {
            format!("r{column}")
        } else {
            format!("t{}", column - num_regulators)
        }
    }
}

impl Formulation<MicrolpGateway> {
    /// Renders the loaded model in LP format.
    pub fn to_lp(&self) -> String {
        write_lp(self.gateway.model(), |column| self.column_label(column))
    }
}

fn check_budget(budget: usize, num_regulators: usize) -> Result<()> {
    if budget > num_regulators {
        return Err(RegcoverError::Config(format!(
            "budget {budget} exceeds the {num_regulators} available regulators"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
