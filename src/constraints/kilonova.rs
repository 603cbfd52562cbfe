//! Aspherical kilonova ejecta energy constraint.
//!
//! Penalizes ejecta mass and velocity combinations, within each dynamical
//! ejecta component, for which the ejecta kinetic energy is less than the
//! binding energy of a neutron-star remnant under a relatively stiff
//! equation of state.

use crate::bound::EjectaMassBound;
use crate::constraint::{Constraint, SCORE_MODIFIER_FIELD};
use crate::error::Result;
use crate::key::Namespace;
use crate::penalty::{PenaltyAccumulator, DEFAULT_VIOLATION_SCALE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Logical field names of the four required parameters, in resolution order.
const REQUIRED_FIELDS: [&str; 4] = [
    "mejecta_blue",
    "vejecta_blue",
    "mejecta_red",
    "vejecta_red",
];

/// Serializable configuration for an [`AsphericalKilonovaConstraint`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KilonovaConstraintConfig {
    /// Instance prefix for namespaced parameter keys.
    pub prefix: String,

    /// Compact-object radius in cm.
    pub compact_radius_cm: f64,

    /// Violation scale applied before squaring.
    pub scale: f64,
}

impl Default for KilonovaConstraintConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            compact_radius_cm: crate::constants::R_NS_CGS,
            scale: DEFAULT_VIOLATION_SCALE,
        }
    }
}

/// Two-component ("blue" and "red") kilonova ejecta constraint.
///
/// For each component independently, the maximum plausible ejecta mass at
/// the component's velocity is computed via [`EjectaMassBound`], and any
/// excess mass contributes a quadratic penalty. The two components'
/// penalties are summed; a violation in one component does not affect the
/// bound computed for the other.
///
/// Required trial parameters, resolved through the instance namespace:
/// `mejecta_blue`, `vejecta_blue`, `mejecta_red`, `vejecta_red`
/// (masses in solar masses, velocities in km/s).
///
/// # Examples
///
/// ```
/// use lcfit_constraints::constraint::Constraint;
/// use lcfit_constraints::constraints::AsphericalKilonovaConstraint;
/// use std::collections::HashMap;
///
/// let constraint = AsphericalKilonovaConstraint::new("kn_");
///
/// let mut params = HashMap::new();
/// params.insert("kn_mejecta_blue".to_string(), 0.02);
/// params.insert("kn_vejecta_blue".to_string(), 2.0e4);
/// params.insert("kn_mejecta_red".to_string(), 0.04);
/// params.insert("kn_vejecta_red".to_string(), 1.0e4);
///
/// let output = constraint.evaluate(&params).unwrap();
/// assert!(output["kn_score_modifier"] <= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct AsphericalKilonovaConstraint {
    namespace: Namespace,
    required_keys: Vec<String>,
    score_key: String,
    bound: EjectaMassBound,
    scale: f64,
}

impl AsphericalKilonovaConstraint {
    /// Create a constraint with the default 20 km compact-object radius.
    pub fn new(prefix: &str) -> Self {
        // Default radius is statically valid, so this cannot fail.
        Self::from_config(&KilonovaConstraintConfig {
            prefix: prefix.to_string(),
            ..KilonovaConstraintConfig::default()
        })
        .unwrap()
    }

    /// Create a constraint with a custom compact-object radius (cm).
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConstraintError::InvalidConfiguration`] if
    /// the radius is not finite and positive.
    pub fn with_radius(prefix: &str, compact_radius_cm: f64) -> Result<Self> {
        Self::from_config(&KilonovaConstraintConfig {
            prefix: prefix.to_string(),
            compact_radius_cm,
            ..KilonovaConstraintConfig::default()
        })
    }

    /// Create a constraint from a serializable configuration.
    pub fn from_config(config: &KilonovaConstraintConfig) -> Result<Self> {
        let namespace = Namespace::new(&config.prefix);
        let required_keys = REQUIRED_FIELDS
            .iter()
            .map(|field| namespace.key(field))
            .collect();
        let score_key = namespace.key(SCORE_MODIFIER_FIELD);
        let bound = EjectaMassBound::with_radius(config.compact_radius_cm)?;

        Ok(Self {
            namespace,
            required_keys,
            score_key,
            bound,
            scale: config.scale,
        })
    }

    /// The configuration equivalent to this instance.
    pub fn config(&self) -> KilonovaConstraintConfig {
        KilonovaConstraintConfig {
            prefix: self.namespace.prefix().to_string(),
            compact_radius_cm: self.bound.compact_radius_cm(),
            scale: self.scale,
        }
    }

    /// The bound function used for both components.
    pub fn bound(&self) -> &EjectaMassBound {
        &self.bound
    }

    fn evaluate_component(
        &self,
        params: &HashMap<String, f64>,
        mass_field: &str,
        velocity_field: &str,
        accumulator: &mut PenaltyAccumulator,
    ) -> Result<ComponentEvaluation> {
        let mass = self.namespace.resolve(params, mass_field)?;
        let velocity = self.namespace.resolve(params, velocity_field)?;

        let bound_mass = self
            .bound
            .bound_mass_keyed(velocity, &self.namespace.key(velocity_field))?;
        let penalty = accumulator.penalize(mass, bound_mass);

        Ok(ComponentEvaluation {
            mass,
            velocity,
            bound_mass,
            penalty,
        })
    }

    /// Evaluate with a per-component breakdown, for debugging and
    /// introspection. [`Constraint::evaluate`] is a thin wrapper over this.
    pub fn evaluate_detailed(&self, params: &HashMap<String, f64>) -> Result<KilonovaEvaluation> {
        let mut accumulator = PenaltyAccumulator::with_scale(self.scale);

        let blue =
            self.evaluate_component(params, "mejecta_blue", "vejecta_blue", &mut accumulator)?;
        let red =
            self.evaluate_component(params, "mejecta_red", "vejecta_red", &mut accumulator)?;

        Ok(KilonovaEvaluation {
            blue,
            red,
            score_modifier: accumulator.total(),
        })
    }
}

impl Constraint for AsphericalKilonovaConstraint {
    fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    fn required_keys(&self) -> &[String] {
        &self.required_keys
    }

    fn score_key(&self) -> &str {
        &self.score_key
    }

    fn evaluate(&self, params: &HashMap<String, f64>) -> Result<HashMap<String, f64>> {
        let evaluation = self.evaluate_detailed(params)?;

        let mut output = HashMap::with_capacity(1);
        output.insert(self.score_key.clone(), evaluation.score_modifier);
        Ok(output)
    }
}

/// One ejecta component's inputs and penalty contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentEvaluation {
    /// Ejecta mass read from the trial parameters (solar masses).
    pub mass: f64,

    /// Ejecta velocity read from the trial parameters (km/s).
    pub velocity: f64,

    /// Maximum plausible mass at this velocity (solar masses).
    pub bound_mass: f64,

    /// This component's penalty contribution, ≤ 0.
    pub penalty: f64,
}

impl ComponentEvaluation {
    /// Whether this component exceeded its mass bound.
    pub fn violated(&self) -> bool {
        self.penalty < 0.0
    }
}

/// Full breakdown of one kilonova constraint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KilonovaEvaluation {
    /// Blue (lanthanide-poor) component.
    pub blue: ComponentEvaluation,

    /// Red (lanthanide-rich) component.
    pub red: ComponentEvaluation,

    /// Summed score modifier reported to the pipeline, ≤ 0.
    pub score_modifier: f64,
}
