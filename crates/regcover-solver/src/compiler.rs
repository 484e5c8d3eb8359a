//! Coverage-consistency constraint compilation.
//!
//! For every target `t` the compiler emits one row
//!
//! ```text
//! sum(x[r] for each mapping r -> t) - y[t] >= 0
//! ```
//!
//! so a target can only be marked covered if one of its regulators is
//! selected. Regulator `r` lives in column `r`, target `t` in column
//! `num_regulators + t`. One row per target keeps the row count at
//! `num_targets` and the non-zero count at `num_mappings + num_targets`.

use regcover_core::{RegcoverError, RelationStore, Result, RowBlock, RowBlockBuilder, RowSense};
use tracing::trace;

/// Compiles the coverage rows of a finalized store.
///
/// The store's `(target, regulator)` ordering groups mappings by target, so a
/// single pass with a current-target cursor is enough: each time the target
/// changes a new row is opened with the target column at `-1`, and every
/// mapping then contributes its regulator column at `+1`.
///
/// # Errors
///
/// Returns [`RegcoverError::ModelConstruction`] if the store is not finalized
/// or the compiled block does not have one row per target.
pub fn compile_coverage_rows(store: &RelationStore) -> Result<RowBlock> {
    if !store.is_finalized() {
        return Err(RegcoverError::ModelConstruction(
            "relation store must be finalized before compiling constraints".into(),
        ));
    }

    let num_regulators = store.num_regulators();
    let num_rows = store.num_targets();
    let num_non_zeros = store.num_mappings() + num_rows;

    let mut builder = RowBlockBuilder::with_capacity(num_rows, num_non_zeros);
    let mut current_target = None;
    for relation in store {
        if current_target != Some(relation.target) {
            current_target = Some(relation.target);
            builder.begin_row(0.0, RowSense::GreaterEqual);
            builder.push(num_regulators + relation.target, -1.0);
        }
        builder.push(relation.regulator, 1.0);
    }
    let block = builder.build();

    trace!(
        event = "coverage_rows",
        columns = ?block.columns(),
        coefficients = ?block.coefficients(),
        row_starts = ?block.row_starts(),
    );

    if block.num_rows() != num_rows || block.num_non_zeros() != num_non_zeros {
        return Err(RegcoverError::ModelConstruction(format!(
            "expected {} coverage rows with {} non-zeros, compiled {} rows with {}",
            num_rows,
            num_non_zeros,
            block.num_rows(),
            block.num_non_zeros()
        )));
    }
    Ok(block)
}

#[cfg(test)]
mod tests;
