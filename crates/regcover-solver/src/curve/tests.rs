use super::*;
use crate::formulation::Weights;
use regcover_test::fixtures::{ladder_store, store_from_pairs, two_regulator_store};
use regcover_test::BruteForceGateway;

fn coverage(curve: &CoverageCurve) -> Vec<usize> {
    curve.iter().map(|point| point.covered).collect()
}

fn maxgene(store: regcover_core::RelationStore) -> Formulation<BruteForceGateway> {
    Formulation::cardinality_constrained(store, BruteForceGateway::new(), 1).unwrap()
}

#[test]
fn test_ladder_curve() {
    let mut formulation = maxgene(ladder_store());
    let curve = scan_coverage_curve(&mut formulation, &CurveOptions::default()).unwrap();

    assert_eq!(coverage(&curve), vec![4, 5, 6]);
    let budgets: Vec<usize> = curve.iter().map(|point| point.budget).collect();
    assert_eq!(budgets, vec![1, 2, 3]);
    assert_eq!(curve.solve_count(), 3);
    assert_eq!(formulation.budget(), Some(3));
}

#[test]
fn test_full_coverage_fills_remaining_budgets() {
    // `a` alone covers every target; `b` and `c` add nothing.
    let store = store_from_pairs(&[("a", "t0"), ("a", "t1"), ("b", "t0"), ("c", "t1")]);
    let mut formulation = maxgene(store);
    let curve = scan_coverage_curve(&mut formulation, &CurveOptions::default()).unwrap();

    assert_eq!(coverage(&curve), vec![2, 2, 2]);
    assert_eq!(curve.solve_count(), 1);
    assert_eq!(formulation.gateway().solve_count(), 1);
    assert!(!curve.points()[1].solved);
    assert_eq!(formulation.budget(), Some(1));
}

#[test]
fn test_shortcut_disabled_solves_every_budget() {
    let mut formulation = maxgene(two_regulator_store());
    let options = CurveOptions {
        shortcut_on_full_coverage: false,
        ..CurveOptions::default()
    };
    let curve = scan_coverage_curve(&mut formulation, &options).unwrap();

    assert_eq!(coverage(&curve), vec![2, 2]);
    assert_eq!(curve.solve_count(), 2);
}

#[test]
fn test_max_budget_caps_the_scan() {
    let mut formulation = maxgene(ladder_store());
    let options = CurveOptions {
        max_budget: Some(2),
        ..CurveOptions::default()
    };
    let curve = scan_coverage_curve(&mut formulation, &options).unwrap();
    assert_eq!(coverage(&curve), vec![4, 5]);

    let options = CurveOptions {
        max_budget: Some(10),
        ..CurveOptions::default()
    };
    let curve = scan_coverage_curve(&mut formulation, &options).unwrap();
    assert_eq!(curve.len(), 3);
}

#[test]
fn test_weighted_selection_has_no_curve() {
    let mut formulation = Formulation::weighted_selection(
        two_regulator_store(),
        BruteForceGateway::new(),
        Weights::default(),
    )
    .unwrap();
    let err = scan_coverage_curve(&mut formulation, &CurveOptions::default()).unwrap_err();
    assert!(matches!(err, RegcoverError::InvalidState(_)));
}

#[test]
fn test_empty_store_gives_empty_curve() {
    let mut formulation = Formulation::cardinality_constrained(
        regcover_core::RelationStore::new(),
        BruteForceGateway::new(),
        0,
    )
    .unwrap();
    let curve = scan_coverage_curve(&mut formulation, &CurveOptions::default()).unwrap();
    assert!(curve.is_empty());
}
