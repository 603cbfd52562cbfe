//! Namespaced parameter key resolution.
//!
//! Every constraint instance owns a [`Namespace`] that scopes its parameter
//! keys, so multiple instances can read from one shared trial-parameter pool
//! without collisions. Keys are composed once, at construction, by literal
//! prefix concatenation — the same convention the fitting pipeline uses for
//! model parameter prefixes (e.g. `"kn_"` + `"mejecta_blue"`).

use crate::error::{ConstraintError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A constraint-instance namespace for parameter keys.
///
/// The prefix is fixed at construction and immutable thereafter; key
/// composition is deterministic across calls within a run. An empty prefix
/// is valid and yields the bare field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    prefix: String,
}

impl Namespace {
    /// Create a namespace with the given instance prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use lcfit_constraints::key::Namespace;
    ///
    /// let ns = Namespace::new("kn_");
    /// assert_eq!(ns.key("mejecta_blue"), "kn_mejecta_blue");
    /// ```
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// The instance prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Compose the namespaced key for a logical field name.
    pub fn key(&self, field: &str) -> String {
        format!("{}{}", self.prefix, field)
    }

    /// Read the current trial value of a logical field from the
    /// pipeline-supplied parameter mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::MissingParameter`] if the composed key has
    /// no entry, and [`ConstraintError::NonFiniteParameter`] if the stored
    /// value is NaN or infinite.
    pub fn resolve(&self, params: &HashMap<String, f64>, field: &str) -> Result<f64> {
        let key = self.key(field);
        let value = *params
            .get(&key)
            .ok_or(ConstraintError::MissingParameter { key: key.clone() })?;

        if !value.is_finite() {
            return Err(ConstraintError::NonFiniteParameter { key, value });
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_key_composition() {
        let ns = Namespace::new("kn_");
        assert_eq!(ns.key("mejecta_blue"), "kn_mejecta_blue");
        assert_eq!(ns.key("score_modifier"), "kn_score_modifier");

        // Composition is stable across calls.
        assert_eq!(ns.key("vejecta_red"), ns.key("vejecta_red"));
    }

    #[test]
    fn test_empty_prefix() {
        let ns = Namespace::new("");
        assert_eq!(ns.key("mejecta_blue"), "mejecta_blue");
    }

    #[test]
    fn test_distinct_prefixes_do_not_collide() {
        let a = Namespace::new("kn1_");
        let b = Namespace::new("kn2_");
        assert_ne!(a.key("mejecta_blue"), b.key("mejecta_blue"));
    }

    #[test]
    fn test_resolve() {
        let ns = Namespace::new("kn_");
        let map = params(&[("kn_mejecta_blue", 0.02), ("kn_vejecta_blue", 2.0e4)]);

        assert_eq!(ns.resolve(&map, "mejecta_blue").unwrap(), 0.02);
        assert_eq!(ns.resolve(&map, "vejecta_blue").unwrap(), 2.0e4);
    }

    #[test]
    fn test_resolve_missing_key() {
        let ns = Namespace::new("kn_");
        let map = params(&[("kn_mejecta_blue", 0.02)]);

        let err = ns.resolve(&map, "mejecta_red").unwrap_err();
        match err {
            ConstraintError::MissingParameter { key } => assert_eq!(key, "kn_mejecta_red"),
            _ => panic!("Expected MissingParameter, got {:?}", err),
        }
    }

    #[test]
    fn test_resolve_non_finite_value() {
        let ns = Namespace::new("kn_");
        let map = params(&[("kn_mejecta_blue", f64::NAN)]);

        let err = ns.resolve(&map, "mejecta_blue").unwrap_err();
        match err {
            ConstraintError::NonFiniteParameter { key, .. } => {
                assert_eq!(key, "kn_mejecta_blue")
            }
            _ => panic!("Expected NonFiniteParameter, got {:?}", err),
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let ns = Namespace::new("kn_");
        let json = serde_json::to_string(&ns).unwrap();
        let restored: Namespace = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ns);
    }
}
