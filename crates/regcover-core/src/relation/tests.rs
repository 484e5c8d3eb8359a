use super::*;

fn store(pairs: &[(&str, &str)]) -> RelationStore {
    let mut store = RelationStore::new();
    for (regulator, target) in pairs {
        store.add(regulator, target).unwrap();
    }
    store
}

#[test]
fn test_add_interns_both_classes() {
    let store = store(&[("r1", "t1"), ("r1", "t2"), ("r2", "t2")]);

    assert_eq!(store.num_regulators(), 2);
    assert_eq!(store.num_targets(), 2);
    assert_eq!(store.num_mappings(), 3);
    assert_eq!(store.regulator(1), Some("r2"));
    assert_eq!(store.target(0), Some("t1"));
}

#[test]
fn test_duplicates_counted_until_finalize() {
    let mut store = store(&[("r1", "t1"), ("r1", "t1"), ("r2", "t1"), ("r1", "t1")]);
    assert_eq!(store.num_mappings(), 4);

    store.finalize();
    assert_eq!(store.num_mappings(), 2);
}

#[test]
fn test_finalize_sorts_by_target_then_regulator() {
    // target ids: t2=0, t1=1; regulator ids: r3=0, r1=1, r2=2
    let mut store = store(&[("r3", "t2"), ("r1", "t1"), ("r2", "t2"), ("r1", "t2")]);
    store.finalize();

    let pairs: Vec<(usize, usize)> = store.iter().map(|r| (r.target, r.regulator)).collect();
    assert_eq!(pairs, vec![(0, 0), (0, 1), (0, 2), (1, 1)]);
}

#[test]
fn test_finalize_twice_is_noop() {
    let mut store = store(&[("r2", "t1"), ("r1", "t1"), ("r2", "t1")]);
    store.finalize();
    let first: Vec<Relation> = store.iter().copied().collect();

    store.finalize();
    assert!(store.is_finalized());
    assert_eq!(store.as_slice(), first.as_slice());
}

#[test]
fn test_add_after_finalize_is_rejected() {
    let mut store = store(&[("r1", "t1")]);
    store.finalize();

    let err = store.add("r2", "t2").unwrap_err();
    assert!(matches!(err, RegcoverError::InvalidState(_)));
    assert_eq!(store.num_regulators(), 1);
    assert_eq!(store.num_targets(), 1);
}

#[test]
fn test_empty_store() {
    let mut store = RelationStore::new();
    store.finalize();

    assert!(store.is_empty());
    assert_eq!(store.num_regulators(), 0);
    assert_eq!(store.num_targets(), 0);
    assert_eq!(store.iter().count(), 0);
}
