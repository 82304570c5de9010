use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::status::TrustStatus;
use crate::constants::TRUST_SCORE_PRECISION;

/// Trust score clamped to [0.0, 1.0].
/// Represents current confidence in a memory item; decays with inactivity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TrustScore(f64);

impl TrustScore {
    /// Above this a memory is `hot`.
    pub const HOT: f64 = 0.8;
    /// Above this a memory is `warm`.
    pub const WARM: f64 = 0.6;
    /// Above this a memory is `cool`; at or below it, archive-eligible.
    pub const COOL: f64 = 0.4;

    /// Create a new TrustScore, clamping to [0.0, 1.0]. NaN becomes 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Clamp and round to the fixed trust precision.
    pub fn rounded(value: f64) -> Self {
        let scale = 10f64.powi(TRUST_SCORE_PRECISION);
        Self::new((Self::new(value).0 * scale).round() / scale)
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Qualitative decay bucket for this score.
    pub fn status(self) -> TrustStatus {
        TrustStatus::from_trust(self.0)
    }
}

impl Default for TrustScore {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for TrustScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for TrustScore {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<TrustScore> for f64 {
    fn from(t: TrustScore) -> Self {
        t.0
    }
}

impl Add<f64> for TrustScore {
    type Output = Self;
    fn add(self, rhs: f64) -> Self {
        Self::new(self.0 + rhs)
    }
}

impl Sub<f64> for TrustScore {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.0 - rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(TrustScore::new(1.7).value(), 1.0);
        assert_eq!(TrustScore::new(-0.2).value(), 0.0);
        assert_eq!(TrustScore::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn rounds_to_three_places() {
        assert_eq!(TrustScore::rounded(0.123_456).value(), 0.123);
        assert_eq!(TrustScore::rounded(0.999_6).value(), 1.0);
        assert_eq!(TrustScore::rounded(-3.0).value(), 0.0);
    }

    #[test]
    fn arithmetic_stays_in_range() {
        assert_eq!((TrustScore::new(0.95) + 0.1).value(), 1.0);
        assert_eq!((TrustScore::new(0.05) - 0.1).value(), 0.0);
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&TrustScore::new(0.5)).unwrap();
        assert_eq!(json, "0.5");
    }
}
