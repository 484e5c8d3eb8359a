//! Solution decoding.

use regcover_core::{RegcoverError, RelationStore, Result};

/// Values strictly above this count as selected.
///
/// Engines return binaries up to their integrality tolerance, so a raw value
/// may sit slightly off `0.0` or `1.0`.
pub const SELECTION_THRESHOLD: f64 = 0.5;

/// Returns true if a raw binary variable value counts as selected.
pub fn is_selected(value: f64) -> bool {
    value > SELECTION_THRESHOLD
}

/// Regulators and targets chosen by a solve, each in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub regulators: Vec<String>,
    pub targets: Vec<String>,
}

impl Selection {
    /// Number of covered targets.
    pub fn coverage(&self) -> usize {
        self.targets.len()
    }
}

/// Maps one value per column back to entity names.
///
/// # Errors
///
/// Returns [`RegcoverError::ModelConstruction`] unless `values` holds exactly
/// `num_regulators + num_targets` entries.
pub fn decode(store: &RelationStore, values: &[f64]) -> Result<Selection> {
    let num_regulators = store.num_regulators();
    let expected = num_regulators + store.num_targets();
    if values.len() != expected {
        return Err(RegcoverError::ModelConstruction(format!(
            "solver returned {} values for {} columns",
            values.len(),
            expected
        )));
    }

    let (regulator_values, target_values) = values.split_at(num_regulators);
    Ok(Selection {
        regulators: selected_names(store.regulators().names(), regulator_values),
        targets: selected_names(store.targets().names(), target_values),
    })
}

fn selected_names<'a>(names: impl Iterator<Item = &'a str>, values: &[f64]) -> Vec<String> {
    names
        .zip(values)
        .filter(|(_, &value)| is_selected(value))
        .map(|(name, _)| name.to_owned())
        .collect()
}
