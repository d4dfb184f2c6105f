//! Score types shared across the engine.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Outfit confidence, always within [0.0, 1.0].
///
/// Construction clamps, so `base + bonuses` can be passed straight in and the
/// upper bound of 1.0 holds without a separate `min`.
///
/// # Examples
///
/// ```
/// use stylist_engine::Confidence;
///
/// let c = Confidence::new(0.86);
/// assert_eq!(c.value(), 0.86);
///
/// // Bonuses never push an outfit past full confidence.
/// assert_eq!(Confidence::new(1.15).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping the value to [0.0, 1.0].
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the inner confidence value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total order used when ranking outfits, highest first.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self(0.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(conf: Confidence) -> Self {
        conf.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Arithmetic mean, or `empty` when there is nothing to average.
pub(crate) fn mean_or(values: impl IntoIterator<Item = f64>, empty: f64) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        empty
    } else {
        sum / count as f64
    }
}
