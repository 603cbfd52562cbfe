//! The constraint abstraction and constraint-set aggregation.
//!
//! A constraint consumes a subset of the current trial parameter vector and
//! emits a non-positive score modifier that the fitting pipeline subtracts
//! from the trial's log-likelihood, steering the sampler away from
//! physically implausible parameter combinations without hard-rejecting
//! them.

use crate::error::{ConstraintError, Result};
use crate::key::Namespace;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;

/// Logical field name of the score-modifier output of a constraint.
pub const SCORE_MODIFIER_FIELD: &str = "score_modifier";

/// A pluggable physical-plausibility constraint.
///
/// Implementations declare their required namespaced input keys up front,
/// so a misconfigured pipeline fails at wiring time rather than mid-run,
/// and compute a score modifier from a fresh trial parameter mapping on
/// every call.
///
/// Evaluation is pure per call: `&self`, no shared mutable state, no
/// caching. Implementations must be safely callable from concurrent walker
/// evaluations without locking.
pub trait Constraint {
    /// The namespace scoping this instance's parameter keys.
    fn namespace(&self) -> &Namespace;

    /// Namespaced keys this constraint reads, fixed at construction.
    fn required_keys(&self) -> &[String];

    /// Namespaced key under which the score modifier is reported.
    fn score_key(&self) -> &str;

    /// Evaluate the constraint against the current trial parameters.
    ///
    /// Returns a mapping with exactly one entry, [`score_key`](Self::score_key)
    /// to a value ≤ 0; 0 means no bound was violated.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::MissingParameter`] if a required key is absent,
    /// plus any domain errors of the underlying bound functions. A failed
    /// evaluation is reported immediately; the pipeline owns the decision
    /// of how it affects the sampler step.
    fn evaluate(&self, params: &HashMap<String, f64>) -> Result<HashMap<String, f64>>;
}

/// A collection of independently evaluated constraints.
///
/// The pipeline registers one entry per constraint instance and merges
/// their score modifiers into a single log-likelihood adjustment per trial.
/// Instances must have distinct score keys; collisions are rejected at
/// registration.
#[derive(Default)]
pub struct ConstraintSet {
    constraints: Vec<Box<dyn Constraint + Send + Sync>>,
}

impl ConstraintSet {
    /// Create an empty constraint set.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Register a constraint instance.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::DuplicateScoreKey`] if another registered
    /// instance already reports under the same score key.
    pub fn add(&mut self, constraint: Box<dyn Constraint + Send + Sync>) -> Result<()> {
        if self
            .constraints
            .iter()
            .any(|c| c.score_key() == constraint.score_key())
        {
            return Err(ConstraintError::DuplicateScoreKey(
                constraint.score_key().to_string(),
            ));
        }

        self.constraints.push(constraint);
        Ok(())
    }

    /// Number of registered constraints.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Evaluate every constraint and merge the per-instance output maps.
    ///
    /// Constraint evaluations are independent of one another; with the
    /// `parallel` feature they run on the rayon thread pool.
    pub fn evaluate_all(&self, params: &HashMap<String, f64>) -> Result<HashMap<String, f64>> {
        let outputs = self.evaluate_each(params)?;

        let mut merged = HashMap::with_capacity(self.constraints.len());
        for output in outputs {
            merged.extend(output);
        }

        Ok(merged)
    }

    /// Evaluate every constraint and sum the score modifiers.
    ///
    /// This is the total adjustment the pipeline subtracts from the trial's
    /// log-likelihood. Always ≤ 0.
    pub fn total_score(&self, params: &HashMap<String, f64>) -> Result<f64> {
        let outputs = self.evaluate_each(params)?;

        Ok(outputs
            .iter()
            .flat_map(|output| output.values())
            .sum())
    }

    #[cfg(feature = "parallel")]
    fn evaluate_each(&self, params: &HashMap<String, f64>) -> Result<Vec<HashMap<String, f64>>> {
        self.constraints
            .par_iter()
            .map(|c| c.evaluate(params))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_each(&self, params: &HashMap<String, f64>) -> Result<Vec<HashMap<String, f64>>> {
        self.constraints
            .iter()
            .map(|c| c.evaluate(params))
            .collect()
    }
}
