//! Physical constants used by constraint bound formulas.
//!
//! All values are in cgs units, matching the convention of the transient
//! fitting literature. They are process-wide and immutable, so concurrent
//! constraint evaluations may read them without synchronization.

/// Speed of light in vacuum (cm/s).
pub const C_CGS: f64 = 2.99792458e10;

/// Solar mass (g).
pub const M_SUN_CGS: f64 = 1.98892e33;

/// Newtonian gravitational constant (cm³ g⁻¹ s⁻²).
pub const G_CGS: f64 = 6.67430e-8;

/// Kilometers to centimeters.
pub const KM_CGS: f64 = 1.0e5;

/// Default compact-object radius (cm), 20 km.
///
/// Corresponds to a neutron-star remnant under a relatively stiff equation
/// of state; overridable per constraint instance.
pub const R_NS_CGS: f64 = 20.0e5;
