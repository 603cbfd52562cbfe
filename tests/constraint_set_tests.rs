//! Tests for aggregating score modifiers from multiple constraint
//! instances, the way the fitting pipeline merges them per trial.

use approx::assert_relative_eq;
use lcfit_constraints::constants::{C_CGS, KM_CGS};
use lcfit_constraints::constraint::{Constraint, ConstraintSet};
use lcfit_constraints::constraints::AsphericalKilonovaConstraint;
use lcfit_constraints::error::ConstraintError;
use std::collections::HashMap;

fn insert_trial(
    params: &mut HashMap<String, f64>,
    prefix: &str,
    mblue: f64,
    vblue: f64,
    mred: f64,
    vred: f64,
) {
    params.insert(format!("{}mejecta_blue", prefix), mblue);
    params.insert(format!("{}vejecta_blue", prefix), vblue);
    params.insert(format!("{}mejecta_red", prefix), mred);
    params.insert(format!("{}vejecta_red", prefix), vred);
}

#[test]
fn two_instances_read_disjoint_namespaces() {
    let first = AsphericalKilonovaConstraint::new("kn1_");
    let second = AsphericalKilonovaConstraint::new("kn2_");

    let v = 0.1 * C_CGS / KM_CGS;
    let bound = first.bound().bound_mass(v).unwrap();

    // kn1 violates its blue bound; kn2 is fully plausible.
    let mut params = HashMap::new();
    insert_trial(&mut params, "kn1_", bound + 0.01, v, 0.001, 1.0e4);
    insert_trial(&mut params, "kn2_", 0.001, v, 0.001, 1.0e4);

    let mut set = ConstraintSet::new();
    set.add(Box::new(first)).unwrap();
    set.add(Box::new(second)).unwrap();

    let merged = set.evaluate_all(&params).unwrap();
    assert_eq!(merged.len(), 2);
    assert!(merged["kn1_score_modifier"] < 0.0);
    assert_eq!(merged["kn2_score_modifier"], 0.0);

    assert_relative_eq!(
        set.total_score(&params).unwrap(),
        merged["kn1_score_modifier"],
        max_relative = 1e-12
    );
}

#[test]
fn total_score_sums_all_instances() {
    let first = AsphericalKilonovaConstraint::new("kn1_");
    let second = AsphericalKilonovaConstraint::new("kn2_");

    let v = 0.1 * C_CGS / KM_CGS;
    let bound = first.bound().bound_mass(v).unwrap();

    let mut params = HashMap::new();
    insert_trial(&mut params, "kn1_", bound + 0.01, v, 0.001, 1.0e4);
    insert_trial(&mut params, "kn2_", bound + 0.02, v, 0.001, 1.0e4);

    let mut set = ConstraintSet::new();
    set.add(Box::new(first)).unwrap();
    set.add(Box::new(second)).unwrap();

    let merged = set.evaluate_all(&params).unwrap();
    let total = set.total_score(&params).unwrap();
    assert_relative_eq!(
        total,
        merged["kn1_score_modifier"] + merged["kn2_score_modifier"],
        max_relative = 1e-12
    );
    assert!(total < 0.0);
}

#[test]
fn duplicate_prefixes_are_rejected_at_registration() {
    let mut set = ConstraintSet::new();
    set.add(Box::new(AsphericalKilonovaConstraint::new("kn_")))
        .unwrap();

    let err = set
        .add(Box::new(AsphericalKilonovaConstraint::new("kn_")))
        .unwrap_err();
    match err {
        ConstraintError::DuplicateScoreKey(key) => assert_eq!(key, "kn_score_modifier"),
        other => panic!("Expected DuplicateScoreKey, got {:?}", other),
    }
}

#[test]
fn failed_instance_fails_the_whole_evaluation() {
    let mut set = ConstraintSet::new();
    set.add(Box::new(AsphericalKilonovaConstraint::new("kn1_")))
        .unwrap();
    set.add(Box::new(AsphericalKilonovaConstraint::new("kn2_")))
        .unwrap();

    // Only kn1 parameters are present.
    let mut params = HashMap::new();
    insert_trial(&mut params, "kn1_", 0.02, 2.0e4, 0.005, 1.0e4);

    let err = set.evaluate_all(&params).unwrap_err();
    match err {
        ConstraintError::MissingParameter { key } => {
            assert!(key.starts_with("kn2_"), "unexpected key {}", key)
        }
        other => panic!("Expected MissingParameter, got {:?}", other),
    }
}
