//! # lcfit-constraints
//!
//! `lcfit-constraints` provides pluggable physical-plausibility constraints
//! for Bayesian transient light-curve fitting pipelines.
//!
//! A constraint reads a subset of the current trial parameter vector
//! produced by a sampler (e.g. an MCMC walker) and emits a non-positive
//! score modifier that the pipeline subtracts from the trial's
//! log-likelihood, steering the sampler away from physically implausible
//! parameter combinations without hard-rejecting them.
//!
//! The library provides:
//! - A [`Constraint`] trait with declared required inputs and a namespaced
//!   key/value output contract
//! - A [`ConstraintSet`](constraint::ConstraintSet) that merges score
//!   modifiers from independent constraints
//! - Physically derived bound functions and quadratic penalty accumulation
//! - A concrete two-component kilonova ejecta energy constraint
//!
//! ## Basic Usage
//!
//! ```
//! use lcfit_constraints::constraint::Constraint;
//! use lcfit_constraints::constraints::AsphericalKilonovaConstraint;
//! use std::collections::HashMap;
//!
//! let constraint = AsphericalKilonovaConstraint::new("kn_");
//!
//! let mut trial = HashMap::new();
//! trial.insert("kn_mejecta_blue".to_string(), 0.02);
//! trial.insert("kn_vejecta_blue".to_string(), 2.0e4);
//! trial.insert("kn_mejecta_red".to_string(), 0.005);
//! trial.insert("kn_vejecta_red".to_string(), 1.0e4);
//!
//! let output = constraint.evaluate(&trial).unwrap();
//! assert_eq!(output["kn_score_modifier"], 0.0);
//! ```

// Public modules
pub mod bound;
pub mod constants;
pub mod constraint;
pub mod constraints;
pub mod error;
pub mod key;
pub mod penalty;

// Re-exports for convenience
pub use constraint::{Constraint, ConstraintSet};
pub use error::{ConstraintError, Result};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
