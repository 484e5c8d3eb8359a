//! Sparse linear model representation.
//!
//! Constraints are stored in compressed-row form: `row_starts[i]` is the
//! offset of row `i` in `columns`/`coefficients`, and the last entry of
//! `row_starts` is a sentinel equal to the number of non-zeros, so row `i`
//! spans `row_starts[i]..row_starts[i + 1]`.

use crate::error::SolverError;
use crate::gateway::{ObjectiveSense, VarType};

/// Relation between a row's activity and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSense {
    /// `activity >= rhs`
    GreaterEqual,
    /// `activity <= rhs`
    LessEqual,
    /// `activity == rhs`
    Equal,
}

impl RowSense {
    pub fn symbol(self) -> &'static str {
        match self {
            RowSense::GreaterEqual => ">=",
            RowSense::LessEqual => "<=",
            RowSense::Equal => "=",
        }
    }

    /// Checks `activity <sense> rhs` up to `tolerance`.
    pub fn is_satisfied(self, activity: f64, rhs: f64, tolerance: f64) -> bool {
        match self {
            RowSense::GreaterEqual => activity >= rhs - tolerance,
            RowSense::LessEqual => activity <= rhs + tolerance,
            RowSense::Equal => (activity - rhs).abs() <= tolerance,
        }
    }
}

/// A block of constraint rows in compressed-row form.
#[derive(Debug, Clone, PartialEq)]
pub struct RowBlock {
    rhs: Vec<f64>,
    senses: Vec<RowSense>,
    row_starts: Vec<usize>,
    columns: Vec<usize>,
    coefficients: Vec<f64>,
}

impl Default for RowBlock {
    fn default() -> Self {
        Self {
            rhs: Vec::new(),
            senses: Vec::new(),
            row_starts: vec![0],
            columns: Vec::new(),
            coefficients: Vec::new(),
        }
    }
}

impl RowBlock {
    /// Creates an empty block with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RowBlockBuilder {
        RowBlockBuilder::default()
    }

    /// Creates a block holding exactly one row.
    pub fn single(
        rhs: f64,
        sense: RowSense,
        entries: impl IntoIterator<Item = (usize, f64)>,
    ) -> Self {
        let mut builder = RowBlockBuilder::default();
        builder.begin_row(rhs, sense);
        for (column, coefficient) in entries {
            builder.push(column, coefficient);
        }
        builder.build()
    }

    pub fn num_rows(&self) -> usize {
        self.rhs.len()
    }

    pub fn num_non_zeros(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rhs.is_empty()
    }

    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    pub fn senses(&self) -> &[RowSense] {
        &self.senses
    }

    /// Row offsets including the trailing sentinel.
    pub fn row_starts(&self) -> &[usize] {
        &self.row_starts
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn row(&self, index: usize) -> Option<RowView<'_>> {
        (index < self.num_rows()).then(|| self.view(index))
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = RowView<'_>> + '_ {
        (0..self.num_rows()).map(move |index| self.view(index))
    }

    fn view(&self, index: usize) -> RowView<'_> {
        let span = self.row_starts[index]..self.row_starts[index + 1];
        RowView {
            rhs: self.rhs[index],
            sense: self.senses[index],
            columns: &self.columns[span.clone()],
            coefficients: &self.coefficients[span],
        }
    }

    /// Largest column index referenced by any row.
    pub fn max_column(&self) -> Option<usize> {
        self.columns.iter().copied().max()
    }

    /// Appends all rows of `other` after the rows of `self`.
    pub fn extend_from(&mut self, other: &RowBlock) {
        let offset = self.columns.len();
        self.rhs.extend_from_slice(&other.rhs);
        self.senses.extend_from_slice(&other.senses);
        self.row_starts
            .extend(other.row_starts[1..].iter().map(|start| start + offset));
        self.columns.extend_from_slice(&other.columns);
        self.coefficients.extend_from_slice(&other.coefficients);
    }

    fn set_rhs(&mut self, row: usize, rhs: f64) -> bool {
        match self.rhs.get_mut(row) {
            Some(slot) => {
                *slot = rhs;
                true
            }
            None => false,
        }
    }
}

/// Borrowed view of one row of a [`RowBlock`].
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    pub rhs: f64,
    pub sense: RowSense,
    pub columns: &'a [usize],
    pub coefficients: &'a [f64],
}

impl RowView<'_> {
    /// Evaluates the row's left-hand side for a full column assignment.
    pub fn activity(&self, values: &[f64]) -> f64 {
        self.entries().map(|(column, c)| c * values[column]).sum()
    }

    pub fn entries(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.columns
            .iter()
            .copied()
            .zip(self.coefficients.iter().copied())
    }

    pub fn is_satisfied(&self, values: &[f64], tolerance: f64) -> bool {
        self.sense
            .is_satisfied(self.activity(values), self.rhs, tolerance)
    }
}

/// Incrementally assembles a [`RowBlock`] one row at a time.
///
/// Opening a row closes the previous one; [`build`](Self::build) closes the
/// last row and writes the non-zero sentinel.
#[derive(Debug, Default)]
pub struct RowBlockBuilder {
    rhs: Vec<f64>,
    senses: Vec<RowSense>,
    row_starts: Vec<usize>,
    columns: Vec<usize>,
    coefficients: Vec<f64>,
}

impl RowBlockBuilder {
    pub fn with_capacity(rows: usize, non_zeros: usize) -> Self {
        Self {
            rhs: Vec::with_capacity(rows),
            senses: Vec::with_capacity(rows),
            row_starts: Vec::with_capacity(rows + 1),
            columns: Vec::with_capacity(non_zeros),
            coefficients: Vec::with_capacity(non_zeros),
        }
    }

    pub fn begin_row(&mut self, rhs: f64, sense: RowSense) {
        self.row_starts.push(self.columns.len());
        self.rhs.push(rhs);
        self.senses.push(sense);
    }

    /// Adds an entry to the currently open row.
    pub fn push(&mut self, column: usize, coefficient: f64) {
        debug_assert!(!self.rhs.is_empty(), "push before begin_row");
        self.columns.push(column);
        self.coefficients.push(coefficient);
    }

    pub fn num_rows(&self) -> usize {
        self.rhs.len()
    }

    pub fn build(mut self) -> RowBlock {
        self.row_starts.push(self.columns.len());
        RowBlock {
            rhs: self.rhs,
            senses: self.senses,
            row_starts: self.row_starts,
            columns: self.columns,
            coefficients: self.coefficients,
        }
    }
}

/// One declared column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub objective: f64,
    pub lower: f64,
    pub upper: f64,
    pub var_type: VarType,
}

/// An in-memory buffer of a complete model.
///
/// Backends that cannot edit a model in place keep one of these and rebuild
/// the engine problem on each solve.
#[derive(Debug, Clone, Default)]
pub struct SparseModel {
    sense: ObjectiveSense,
    columns: Vec<Column>,
    rows: RowBlock,
}

impl SparseModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_columns(
        &mut self,
        objective: &[f64],
        lower: &[f64],
        upper: &[f64],
        types: &[VarType],
    ) -> Result<(), SolverError> {
        let count = objective.len();
        if lower.len() != count || upper.len() != count || types.len() != count {
            return Err(SolverError::new(format!(
                "column arrays disagree in length: objective={}, lower={}, upper={}, types={}",
                count,
                lower.len(),
                upper.len(),
                types.len()
            )));
        }
        self.columns.extend((0..count).map(|i| Column {
            objective: objective[i],
            lower: lower[i],
            upper: upper[i],
            var_type: types[i],
        }));
        Ok(())
    }

    pub fn add_rows(&mut self, block: &RowBlock) -> Result<(), SolverError> {
        if let Some(column) = block.max_column() {
            if column >= self.columns.len() {
                return Err(SolverError::new(format!(
                    "row references column {} but only {} columns exist",
                    column,
                    self.columns.len()
                )));
            }
        }
        self.rows.extend_from(block);
        Ok(())
    }

    pub fn set_sense(&mut self, sense: ObjectiveSense) {
        self.sense = sense;
    }

    pub fn change_rhs(&mut self, row: usize, rhs: f64) -> Result<(), SolverError> {
        if self.rows.set_rhs(row, rhs) {
            Ok(())
        } else {
            Err(SolverError::new(format!(
                "row index {} out of range ({} rows)",
                row,
                self.rows.num_rows()
            )))
        }
    }

    pub fn sense(&self) -> ObjectiveSense {
        self.sense
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &RowBlock {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.num_rows()
    }

    pub fn num_non_zeros(&self) -> usize {
        self.rows.num_non_zeros()
    }

    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.columns
            .iter()
            .zip(values)
            .map(|(column, value)| column.objective * value)
            .sum()
    }

    /// Checks column bounds and every row for `values`.
    pub fn is_feasible(&self, values: &[f64], tolerance: f64) -> bool {
        if values.len() != self.columns.len() {
            return false;
        }
        let within_bounds = self.columns.iter().zip(values).all(|(column, &v)| {
            v >= column.lower - tolerance && v <= column.upper + tolerance
        });
        within_bounds && self.rows.rows().all(|row| row.is_satisfied(values, tolerance))
    }
}
