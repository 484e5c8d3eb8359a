//! `proptest` strategies for random mapping lists.

use proptest::prelude::*;
use regcover_core::RelationStore;

/// Mapping lists over `r0..r{regulators}` and `t0..t{targets}`.
///
/// Names are drawn from small alphabets so duplicate pairs and shared
/// targets are frequent.
pub fn mapping_pairs(
    regulators: usize,
    targets: usize,
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (0..regulators, 0..targets).prop_map(|(r, t)| (format!("r{r}"), format!("t{t}"))),
        len,
    )
}

/// Non-empty mapping lists small enough for exhaustive solving
/// (at most 4 regulators and 5 targets, so at most 9 columns).
pub fn small_mappings() -> impl Strategy<Value = Vec<(String, String)>> {
    mapping_pairs(4, 5, 1..10)
}

/// Builds an open store from owned name pairs.
pub fn store_from_owned(pairs: &[(String, String)]) -> RelationStore {
    let mut store = RelationStore::new();
    for (regulator, target) in pairs {
        store
            .add(regulator, target)
            .expect("fresh store accepts mappings");
    }
    store
}
