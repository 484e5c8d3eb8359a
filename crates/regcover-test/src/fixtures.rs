//! Hand-written relation stores.
//!
//! All stores are returned open (not finalized) so callers can still add
//! mappings or exercise finalization themselves.

use regcover_core::RelationStore;

/// Builds an open store from `(regulator, target)` name pairs.
pub fn store_from_pairs(pairs: &[(&str, &str)]) -> RelationStore {
    let mut store = RelationStore::new();
    for (regulator, target) in pairs {
        store
            .add(regulator, target)
            .expect("fresh store accepts mappings");
    }
    store
}

/// `r1` regulates `t1` and `t2`, `r2` regulates only `t2`.
///
/// With a budget of one, `r1` covers both targets and `r2` covers one.
pub fn two_regulator_store() -> RelationStore {
    store_from_pairs(&[("r1", "t1"), ("r1", "t2"), ("r2", "t2")])
}

/// Three regulators whose best covers grow by budget as 4, 5, 6 targets.
///
/// `hub` covers `t0..=t3`, `side` covers `t3` and `t4`, `leaf` covers `t5`.
pub fn ladder_store() -> RelationStore {
    store_from_pairs(&[
        ("hub", "t0"),
        ("hub", "t1"),
        ("hub", "t2"),
        ("hub", "t3"),
        ("side", "t3"),
        ("side", "t4"),
        ("leaf", "t5"),
    ])
}

/// The two-regulator store with its mappings repeated and shuffled.
pub fn noisy_two_regulator_store() -> RelationStore {
    store_from_pairs(&[
        ("r2", "t2"),
        ("r1", "t2"),
        ("r1", "t1"),
        ("r2", "t2"),
        ("r1", "t1"),
    ])
}
