//! Physically derived parameter bounds.
//!
//! A bound function maps a kinematic quantity to the maximum value another
//! parameter may take before the combination becomes physically implausible.
//! Bounds are computed fresh on every evaluation; nothing is cached.

use crate::constants::{C_CGS, G_CGS, KM_CGS, M_SUN_CGS, R_NS_CGS};
use crate::error::{ConstraintError, Result};
use serde::{Deserialize, Serialize};

/// Maximum ejecta mass at a given ejecta velocity.
///
/// The bound is the mass at which the ejecta kinetic energy equals the
/// binding energy of a fixed-radius compact remnant, with the relativistic
/// kinetic-energy correction:
///
/// ```text
/// M_max(v) = (5 R c²)/(3 G) · (1/√(1 − (v/c)²) − 1) / M_sun
/// ```
///
/// with `R` the compact-object radius in cm and `v` the velocity converted
/// from km/s to cm/s. `M_max(0) = 0` and the bound grows without limit as
/// `|v| → c`: faster ejecta can carry more mass before binding energy would
/// exceed kinetic energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EjectaMassBound {
    /// Compact-object radius in cm.
    compact_radius_cm: f64,
}

impl Default for EjectaMassBound {
    fn default() -> Self {
        Self {
            compact_radius_cm: R_NS_CGS,
        }
    }
}

impl EjectaMassBound {
    /// Create a bound with the default 20 km compact-object radius.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bound with a custom compact-object radius (cm).
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::InvalidConfiguration`] if the radius is
    /// not finite and positive.
    pub fn with_radius(compact_radius_cm: f64) -> Result<Self> {
        if !compact_radius_cm.is_finite() || compact_radius_cm <= 0.0 {
            return Err(ConstraintError::InvalidConfiguration(format!(
                "compact-object radius must be finite and positive, got {}",
                compact_radius_cm
            )));
        }
        Ok(Self { compact_radius_cm })
    }

    /// The compact-object radius in cm.
    pub fn compact_radius_cm(&self) -> f64 {
        self.compact_radius_cm
    }

    /// Compute the maximum ejecta mass (solar masses) for a velocity in km/s.
    ///
    /// The formula is only real for `|v| < c` strictly; at or beyond c the
    /// term under the square root is ≤ 0 and the call fails rather than
    /// producing NaN. For velocities close enough to c that the Lorentz
    /// factor overflows, the bound is clamped to `f64::MAX` instead of
    /// returning infinity.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::SuperluminalVelocity`] for `|v| >= c` and
    /// [`ConstraintError::NonFiniteParameter`] for NaN or infinite input.
    pub fn bound_mass(&self, velocity_km_s: f64) -> Result<f64> {
        self.bound_mass_keyed(velocity_km_s, "velocity")
    }

    /// As [`bound_mass`](Self::bound_mass), but errors carry the namespaced
    /// key of the offending parameter.
    pub fn bound_mass_keyed(&self, velocity_km_s: f64, key: &str) -> Result<f64> {
        if !velocity_km_s.is_finite() {
            return Err(ConstraintError::NonFiniteParameter {
                key: key.to_string(),
                value: velocity_km_s,
            });
        }

        let beta = velocity_km_s * KM_CGS / C_CGS;
        if beta.abs() >= 1.0 {
            return Err(ConstraintError::SuperluminalVelocity {
                key: key.to_string(),
                velocity_km_s,
            });
        }

        let gamma = 1.0 / (1.0 - beta * beta).sqrt();
        let bound =
            (5.0 * self.compact_radius_cm * C_CGS * C_CGS) / (3.0 * G_CGS) * (gamma - 1.0)
                / M_SUN_CGS;

        // 1 - beta^2 can round to 0 just below c; keep the bound finite so
        // it never injects infinity into a score aggregate.
        if bound.is_finite() {
            Ok(bound)
        } else {
            Ok(f64::MAX)
        }
    }
}
