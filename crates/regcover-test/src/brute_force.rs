//! Exhaustive reference engine.
//!
//! Enumerates every 0/1 assignment of a small all-binary model and returns
//! the first best one in enumeration order. Results are deterministic, which
//! makes it suitable for checking formulations independently of an LP engine.

use regcover_core::{
    ObjectiveSense, RowBlock, SolverError, SolverGateway, SparseModel, VarType,
};

/// Largest model (in columns) the gateway agrees to enumerate.
pub const MAX_COLUMNS: usize = 20;

const TOLERANCE: f64 = 1e-9;

/// A [`SolverGateway`] that solves by enumerating all assignments.
///
/// Assignment `mask` sets column `i` to `(mask >> i) & 1`; masks are visited
/// in ascending order and only strictly better objectives replace the
/// incumbent.
#[derive(Debug, Clone, Default)]
pub struct BruteForceGateway {
    model: SparseModel,
    solve_count: usize,
}

impl BruteForceGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> &SparseModel {
        &self.model
    }

    /// Number of completed `optimize` calls.
    pub fn solve_count(&self) -> usize {
        self.solve_count
    }

    fn check_binary(&self) -> Result<(), SolverError> {
        let non_binary = self
            .model
            .columns()
            .iter()
            .position(|column| column.var_type != VarType::Binary);
        match non_binary {
            Some(index) => Err(SolverError::new(format!(
                "brute force supports binary columns only, column {index} is not binary"
            ))),
            None => Ok(()),
        }
    }
}

impl SolverGateway for BruteForceGateway {
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
        let n = self.model.num_columns();
        if n > MAX_COLUMNS {
            return Err(SolverError::new(format!(
                "model has {n} columns, brute force is limited to {MAX_COLUMNS}"
            )));
        }
        self.check_binary()?;

        let sense = self.model.sense();
        let mut values = vec![0.0; n];
        let mut best: Option<(f64, Vec<f64>)> = None;
        for mask in 0u64..(1u64 << n) {
            for (i, value) in values.iter_mut().enumerate() {
                *value = ((mask >> i) & 1) as f64;
            }
            if !self.model.is_feasible(&values, TOLERANCE) {
                continue;
            }
            let objective = self.model.objective_value(&values);
            let improves = match &best {
                None => true,
                Some((incumbent, _)) => match sense {
                    ObjectiveSense::Maximize => objective > incumbent + TOLERANCE,
                    ObjectiveSense::Minimize => objective < incumbent - TOLERANCE,
                },
            };
            if improves {
                best = Some((objective, values.clone()));
            }
        }

        let values = best.map(|(_, values)| values).ok_or_else(|| {
            SolverError::new("infeasible: no 0/1 assignment satisfies every row")
        })?;
        self.solve_count += 1;
        Ok(values)
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

#[cfg(test)]
mod tests {
    use super::*;
    use regcover_core::RowSense;

    fn knapsack() -> BruteForceGateway {
        let mut gateway = BruteForceGateway::new();
        gateway
            .add_variables(&[3.0, 2.0, 2.0], &[0.0; 3], &[1.0; 3], &[VarType::Binary; 3])
            .unwrap();
        gateway
            .add_constraint_rows(&RowBlock::single(
                2.0,
                RowSense::LessEqual,
                [(0, 2.0), (1, 1.0), (2, 1.0)],
            ))
            .unwrap();
        gateway.set_objective_sense(ObjectiveSense::Maximize).unwrap();
        gateway
    }

    #[test]
    fn test_finds_maximum() {
        let mut gateway = knapsack();
        assert_eq!(gateway.optimize().unwrap(), vec![0.0, 1.0, 1.0]);
        assert_eq!(gateway.solve_count(), 1);
    }

    #[test]
    fn test_minimize() {
        let mut gateway = knapsack();
        gateway.set_objective_sense(ObjectiveSense::Minimize).unwrap();
        assert_eq!(gateway.optimize().unwrap(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rhs_change_is_seen_by_next_solve() {
        let mut gateway = knapsack();
        gateway.change_constraint_rhs(0, 0.0).unwrap();
        assert_eq!(gateway.optimize().unwrap(), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_infeasible() {
        let mut gateway = knapsack();
        gateway
            .add_constraint_rows(&RowBlock::single(
                4.0,
                RowSense::GreaterEqual,
                [(1, 1.0), (2, 1.0)],
            ))
            .unwrap();
        let err = gateway.optimize().unwrap_err();
        assert!(err.message().starts_with("infeasible"));
        assert_eq!(gateway.solve_count(), 0);
    }

    #[test]
    fn test_solve_count_tracks_only_successful_solves() {
        let mut gateway = knapsack();
        gateway.optimize().unwrap();
        gateway.change_constraint_rhs(0, -1.0).unwrap();
        assert!(gateway.optimize().is_err());
        assert_eq!(gateway.solve_count(), 1);

        gateway.change_constraint_rhs(0, 2.0).unwrap();
        gateway.optimize().unwrap();
        assert_eq!(gateway.solve_count(), 2);
    }

    #[test]
    fn test_rejects_continuous_columns() {
        let mut gateway = BruteForceGateway::new();
        gateway
            .add_variables(&[1.0], &[0.0], &[1.0], &[VarType::Continuous])
            .unwrap();
        assert!(gateway.optimize().is_err());
    }

    #[test]
    fn test_empty_model() {
        let mut gateway = BruteForceGateway::new();
        assert_eq!(gateway.optimize().unwrap(), Vec::<f64>::new());
    }
}
