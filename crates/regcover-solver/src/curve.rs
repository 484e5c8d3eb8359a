//! Coverage-versus-budget curve.
//!
//! Solves a cardinality-constrained formulation once per budget, reusing the
//! loaded model and only rewriting the budget row between solves.

use regcover_core::{RegcoverError, Result, SolverGateway};
use tracing::debug;

use crate::formulation::Formulation;

/// Controls which budgets a scan visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveOptions {
    /// Largest budget to visit; `None` means the number of regulators.
    pub max_budget: Option<usize>,
    /// Once every target is covered, fill the remaining budgets without
    /// solving.
    pub shortcut_on_full_coverage: bool,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            max_budget: None,
            shortcut_on_full_coverage: true,
        }
    }
}

/// Best coverage at one budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurvePoint {
    pub budget: usize,
    pub covered: usize,
    /// False when the point was filled in after full coverage was reached.
    pub solved: bool,
}

/// Points for budgets `1..=max` in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageCurve {
    points: Vec<CurvePoint>,
}

impl CoverageCurve {
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points that required a solve.
    pub fn solve_count(&self) -> usize {
        self.points.iter().filter(|point| point.solved).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a CoverageCurve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Solves `formulation` for each budget from 1 up to the number of
/// regulators (or `options.max_budget`, if smaller).
///
/// The formulation is left at the last budget that was solved.
///
/// # Errors
///
/// Returns [`RegcoverError::InvalidState`] for a weighted selection
/// formulation. A solver failure at any budget aborts the scan.
pub fn scan_coverage_curve<G: SolverGateway>(
    formulation: &mut Formulation<G>,
    options: &CurveOptions,
) -> Result<CoverageCurve> {
    if formulation.budget().is_none() {
        return Err(RegcoverError::InvalidState(format!(
            "coverage curve needs a budget, {} formulation has none",
            formulation.kind().name()
        )));
    }

    let num_regulators = formulation.store().num_regulators();
    let num_targets = formulation.store().num_targets();
    let last = options
        .max_budget
        .map_or(num_regulators, |max| max.min(num_regulators));

    let mut points = Vec::with_capacity(last);
    let mut full_coverage = false;
    for budget in 1..=last {
        if full_coverage {
            points.push(CurvePoint {
                budget,
                covered: num_targets,
                solved: false,
            });
            continue;
        }

        formulation.set_budget(budget)?;
        let covered = formulation.solve()?.coverage();
        debug!(event = "curve_step", budget, covered, num_targets);
        points.push(CurvePoint {
            budget,
            covered,
            solved: true,
        });
        full_coverage = options.shortcut_on_full_coverage && covered == num_targets;
    }

    Ok(CoverageCurve { points })
}

#[cfg(test)]
mod tests;
