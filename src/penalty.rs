//! Accumulation of bound-violation penalties into a score modifier.

use serde::{Deserialize, Serialize};

/// Default scale applied to a violation before squaring.
pub const DEFAULT_VIOLATION_SCALE: f64 = 100.0;

/// Accumulates quadratic penalties for values exceeding their bounds.
///
/// Each violating `(value, bound)` pair contributes `-(scale·(value−bound))²`
/// to the total; pairs at or below their bound contribute nothing. The
/// quadratic form penalizes small excursions mildly and large ones
/// superlinearly, so the sampler is steered back without a hard cliff in the
/// likelihood surface. Contributions from independent checks are summed,
/// never averaged or multiplied.
///
/// One accumulator is created per evaluation call and discarded afterwards;
/// it carries no state between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyAccumulator {
    scale: f64,
    total: f64,
}

impl Default for PenaltyAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PenaltyAccumulator {
    /// Create an accumulator with the default violation scale of 100.
    pub fn new() -> Self {
        Self::with_scale(DEFAULT_VIOLATION_SCALE)
    }

    /// Create an accumulator with a custom violation scale.
    pub fn with_scale(scale: f64) -> Self {
        Self { scale, total: 0.0 }
    }

    /// The violation scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Record one `(value, bound)` check and return its contribution.
    ///
    /// The contribution is 0 when `value <= bound` and
    /// `-(scale·(value−bound))²` otherwise.
    pub fn penalize(&mut self, value: f64, bound: f64) -> f64 {
        // Clamp to the most negative finite f64 so an extreme violation can
        // never inject -inf into the pipeline's score aggregate.
        let contribution = if value > bound {
            let excess = self.scale * (value - bound);
            (-(excess * excess)).max(f64::MIN)
        } else {
            0.0
        };

        self.total = (self.total + contribution).max(f64::MIN);
        contribution
    }

    /// The accumulated score modifier, always finite and ≤ 0.
    pub fn total(&self) -> f64 {
        self.total
    }
}
