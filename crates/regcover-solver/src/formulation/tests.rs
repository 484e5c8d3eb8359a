use super::*;
use regcover_test::fixtures::{ladder_store, two_regulator_store};
use regcover_test::BruteForceGateway;

fn maxgene(store: RelationStore, budget: usize) -> Formulation<BruteForceGateway> {
    Formulation::cardinality_constrained(store, BruteForceGateway::new(), budget).unwrap()
}

fn minmax(store: RelationStore, regulator: f64, target: f64) -> Formulation<BruteForceGateway> {
    let weights = Weights::new(regulator, target).unwrap();
    Formulation::weighted_selection(store, BruteForceGateway::new(), weights).unwrap()
}

#[test]
fn test_budget_one_picks_the_wider_regulator() {
    let mut formulation = maxgene(two_regulator_store(), 1);
    let selection = formulation.solve().unwrap();

    assert_eq!(selection.regulators, vec!["r1"]);
    assert_eq!(selection.targets, vec!["t1", "t2"]);
    assert_eq!(selection.coverage(), 2);
}

#[test]
fn test_budget_is_met_exactly() {
    let mut formulation = maxgene(ladder_store(), 2);
    let selection = formulation.solve().unwrap();
    assert_eq!(selection.regulators.len(), 2);
    assert_eq!(selection.coverage(), 5);

    formulation.set_budget(3).unwrap();
    let selection = formulation.solve().unwrap();
    assert_eq!(selection.regulators, vec!["hub", "side", "leaf"]);
    assert_eq!(selection.coverage(), 6);
}

#[test]
fn test_set_budget_only_rewrites_the_budget_row() {
    let mut formulation = maxgene(ladder_store(), 1);
    let before = formulation.gateway().model().rows().clone();

    formulation.set_budget(2).unwrap();
    let after = formulation.gateway().model().rows();

    assert_eq!(after.rhs()[0], 2.0);
    assert_eq!(after.rhs()[1..], before.rhs()[1..]);
    assert_eq!(after.columns(), before.columns());
    assert_eq!(after.coefficients(), before.coefficients());
    assert_eq!(after.row_starts(), before.row_starts());
    assert_eq!(formulation.budget(), Some(2));
}

#[test]
fn test_budget_row_comes_first() {
    let formulation = maxgene(two_regulator_store(), 1);
    let rows = formulation.gateway().model().rows();
    let budget_row = rows.row(0).unwrap();

    assert_eq!(budget_row.sense, RowSense::Equal);
    assert_eq!(budget_row.rhs, 1.0);
    assert_eq!(budget_row.columns, &[0, 1]);
    assert!(rows.rows().skip(1).all(|row| row.sense == RowSense::GreaterEqual));
}

#[test]
fn test_weighted_selection_counts() {
    let store = ladder_store();
    let (r, t, p) = (3, 6, 7);
    let formulation = minmax(store, 1.0, 1.0);
    let stats = formulation.statistics();

    assert_eq!(stats.variables, r + t);
    assert_eq!(stats.constraints, t);
    assert_eq!(stats.non_zeros, p + t);
}

#[test]
fn test_cardinality_counts() {
    let (r, t, p) = (3, 6, 7);
    let formulation = maxgene(ladder_store(), 2);
    let stats = formulation.statistics();

    assert_eq!(stats.variables, r + t);
    assert_eq!(stats.constraints, t + 1);
    assert_eq!(stats.non_zeros, p + t + r);
}

#[test]
fn test_weighted_objective_signs() {
    let formulation = minmax(two_regulator_store(), 2.0, 3.0);
    let objective: Vec<f64> = formulation
        .gateway()
        .model()
        .columns()
        .iter()
        .map(|column| column.objective)
        .collect();

    assert_eq!(objective, vec![-2.0, -2.0, 3.0, 3.0]);
    assert_eq!(formulation.gateway().model().sense(), ObjectiveSense::Maximize);
}

#[test]
fn test_weighted_selection_balances_weights() {
    // Each regulator costs 1, each target earns 1: r1 (+2 - 1) pays off,
    // adding r2 covers nothing new.
    let mut formulation = minmax(two_regulator_store(), 1.0, 1.0);
    let selection = formulation.solve().unwrap();
    assert_eq!(selection.regulators, vec!["r1"]);
    assert_eq!(selection.targets, vec!["t1", "t2"]);

    // Regulators too expensive to be worth any target.
    let mut formulation = minmax(two_regulator_store(), 3.0, 1.0);
    assert_eq!(formulation.solve().unwrap(), Selection::default());
}

#[test]
fn test_budget_above_regulator_count_is_rejected() {
    let err =
        Formulation::cardinality_constrained(two_regulator_store(), BruteForceGateway::new(), 3)
            .unwrap_err();
    assert!(matches!(err, RegcoverError::Config(_)));

    let mut formulation = maxgene(two_regulator_store(), 1);
    let err = formulation.set_budget(5).unwrap_err();
    assert!(matches!(err, RegcoverError::Config(_)));
    assert_eq!(formulation.budget(), Some(1));
    assert_eq!(formulation.gateway().model().rows().rhs()[0], 1.0);
}

#[test]
fn test_set_budget_on_weighted_selection_is_rejected() {
    let mut formulation = minmax(two_regulator_store(), 1.0, 1.0);
    let err = formulation.set_budget(1).unwrap_err();
    assert!(matches!(err, RegcoverError::InvalidState(_)));
    assert_eq!(formulation.budget(), None);
}

#[test]
fn test_invalid_weights() {
    assert!(matches!(Weights::new(-1.0, 1.0), Err(RegcoverError::Config(_))));
    assert!(matches!(Weights::new(1.0, f64::NAN), Err(RegcoverError::Config(_))));
    assert!(matches!(
        Weights::new(f64::INFINITY, 1.0),
        Err(RegcoverError::Config(_))
    ));
    assert!(Weights::new(0.0, 0.0).is_ok());
}

#[test]
fn test_store_is_finalized_on_construction() {
    let formulation = maxgene(two_regulator_store(), 2);
    assert!(formulation.store().is_finalized());
}

#[test]
fn test_empty_store_is_a_valid_model() {
    let mut formulation = minmax(RelationStore::new(), 1.0, 1.0);
    assert_eq!(formulation.statistics(), ModelStatistics::default());
    assert_eq!(formulation.solve().unwrap(), Selection::default());

    let mut formulation = maxgene(RelationStore::new(), 0);
    assert_eq!(formulation.statistics().constraints, 1);
    assert_eq!(formulation.solve().unwrap(), Selection::default());
}

#[test]
fn test_kind_names_and_labels() {
    let formulation = maxgene(two_regulator_store(), 1);
    assert_eq!(formulation.kind().name(), "MaxGene");
    assert_eq!(
        FormulationKind::WeightedSelection(Weights::default()).name(),
        "MinMax"
    );
    assert_eq!(formulation.column_label(1), "r1");
    assert_eq!(formulation.column_label(2), "t0");
    assert_eq!(formulation.column_label(3), "t1");
}
