use super::*;
use regcover_test::fixtures::{ladder_store, noisy_two_regulator_store, two_regulator_store};

fn finalized(mut store: RelationStore) -> RelationStore {
    store.finalize();
    store
}

#[test]
fn test_two_regulator_rows() {
    let store = finalized(two_regulator_store());
    let block = compile_coverage_rows(&store).unwrap();

    // r1=0, r2=1, t1 -> column 2, t2 -> column 3
    assert_eq!(block.num_rows(), 2);
    assert_eq!(block.row_starts(), &[0, 2, 5]);
    assert_eq!(block.columns(), &[2, 0, 3, 0, 1]);
    assert_eq!(block.coefficients(), &[-1.0, 1.0, -1.0, 1.0, 1.0]);
    assert_eq!(block.rhs(), &[0.0, 0.0]);
    assert!(block.senses().iter().all(|&s| s == RowSense::GreaterEqual));
}

#[test]
fn test_duplicates_do_not_add_entries() {
    let clean = compile_coverage_rows(&finalized(two_regulator_store())).unwrap();
    let noisy_store = finalized(noisy_two_regulator_store());
    let noisy = compile_coverage_rows(&noisy_store).unwrap();

    assert_eq!(noisy.num_rows(), clean.num_rows());
    assert_eq!(noisy.num_non_zeros(), clean.num_non_zeros());
}

#[test]
fn test_shape_matches_store_counts() {
    let store = finalized(ladder_store());
    let block = compile_coverage_rows(&store).unwrap();

    assert_eq!(block.num_rows(), store.num_targets());
    assert_eq!(block.num_non_zeros(), store.num_mappings() + store.num_targets());
    assert_eq!(*block.row_starts().last().unwrap(), block.num_non_zeros());
}

#[test]
fn test_each_row_leads_with_its_target_column() {
    let store = finalized(ladder_store());
    let block = compile_coverage_rows(&store).unwrap();

    for (target, row) in block.rows().enumerate() {
        assert_eq!(row.columns[0], store.num_regulators() + target);
        assert_eq!(row.coefficients[0], -1.0);
        assert!(row.columns[1..].iter().all(|&c| c < store.num_regulators()));
        assert!(row.coefficients[1..].iter().all(|&c| c == 1.0));
    }
}

#[test]
fn test_unfinalized_store_is_rejected() {
    let err = compile_coverage_rows(&two_regulator_store()).unwrap_err();
    assert!(matches!(err, RegcoverError::ModelConstruction(_)));
}

#[test]
fn test_empty_store_compiles_to_no_rows() {
    let block = compile_coverage_rows(&finalized(RelationStore::new())).unwrap();
    assert!(block.is_empty());
    assert_eq!(block.row_starts(), &[0]);
}
