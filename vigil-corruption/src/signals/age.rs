use chrono::{DateTime, Utc};
use vigil_core::memory::MemoryProvenance;

/// Linear ramp from 0 at creation to 1 at `ramp_days`.
pub fn calculate(provenance: &MemoryProvenance, now: DateTime<Utc>, ramp_days: f64) -> f64 {
    (super::provenance_age_days(provenance, now) / ramp_days).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use vigil_core::memory::{MemorySource, ValidationLevel};

    fn aged(days: i64, now: DateTime<Utc>) -> MemoryProvenance {
        MemoryProvenance::new(
            MemorySource::UserInput,
            1.0,
            ValidationLevel::Verified,
            now - Duration::days(days),
        )
    }

    #[test]
    fn ramps_linearly_then_saturates() {
        let now = Utc::now();
        assert_eq!(calculate(&aged(0, now), now, 90.0), 0.0);
        assert!((calculate(&aged(45, now), now, 90.0) - 0.5).abs() < 1e-12);
        assert_eq!(calculate(&aged(90, now), now, 90.0), 1.0);
        assert_eq!(calculate(&aged(400, now), now, 90.0), 1.0);
    }

    #[test]
    fn future_timestamp_is_fresh() {
        let now = Utc::now();
        assert_eq!(calculate(&aged(-5, now), now, 90.0), 0.0);
    }
}
