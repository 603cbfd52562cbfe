//! Concrete constraint implementations.
//!
//! Each submodule encodes one physical-plausibility scenario as an
//! implementation of the [`Constraint`](crate::constraint::Constraint)
//! trait.

pub mod kilonova;

// Re-export key types
pub use kilonova::{
    AsphericalKilonovaConstraint, ComponentEvaluation, KilonovaConstraintConfig,
    KilonovaEvaluation,
};
