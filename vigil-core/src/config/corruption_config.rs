use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Corruption detection configuration.
///
/// Defaults keep `decay_threshold == quarantine_threshold`, which leaves the
/// `decayed` band empty until the two are configured apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorruptionConfig {
    /// Score at or above which a memory is `decayed`.
    pub decay_threshold: f64,
    /// Score at or above which a memory is `quarantined`.
    pub quarantine_threshold: f64,
    /// Maximum retained assessment history entries per memory.
    pub max_history_entries: usize,
    /// Interval between background assessment sweeps (seconds).
    pub assessment_interval_secs: u64,
    /// Fire the quarantine action automatically when an assessment lands in quarantine.
    pub auto_quarantine: bool,
    /// Provenance age (days) beyond which the temporal contradiction check fires.
    pub temporal_window_days: f64,
    /// Provenance age (days) at which the age-decay signal saturates at 1.0.
    pub age_ramp_days: f64,
    /// Provenance confidence below which the factual contradiction check fires.
    pub factual_confidence_floor: f64,
}

impl Default for CorruptionConfig {
    fn default() -> Self {
        Self {
            decay_threshold: defaults::DEFAULT_DECAY_THRESHOLD,
            quarantine_threshold: defaults::DEFAULT_QUARANTINE_THRESHOLD,
            max_history_entries: defaults::DEFAULT_CORRUPTION_HISTORY_ENTRIES,
            assessment_interval_secs: defaults::DEFAULT_ASSESSMENT_INTERVAL_SECS,
            auto_quarantine: defaults::DEFAULT_AUTO_QUARANTINE,
            temporal_window_days: defaults::DEFAULT_TEMPORAL_WINDOW_DAYS,
            age_ramp_days: defaults::DEFAULT_AGE_RAMP_DAYS,
            factual_confidence_floor: defaults::DEFAULT_FACTUAL_CONFIDENCE_FLOOR,
        }
    }
}

impl CorruptionConfig {
    /// Assessment interval as a `Duration`.
    pub fn assessment_interval(&self) -> Duration {
        Duration::from_secs(self.assessment_interval_secs)
    }

    /// Validate threshold ordering, interval, history cap, and signal windows.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (d, q) = (self.decay_threshold, self.quarantine_threshold);
        let ordered = d.is_finite() && q.is_finite() && 0.0 <= d && d <= q && q <= 1.0;
        if !ordered {
            return Err(ConfigError::InvalidThresholds {
                decay: d,
                quarantine: q,
            });
        }
        if self.assessment_interval_secs == 0 {
            return Err(ConfigError::InvalidInterval {
                component: "corruption",
            });
        }
        if self.max_history_entries == 0 {
            return Err(ConfigError::InvalidHistoryCap {
                component: "corruption",
            });
        }
        for (field, value) in [
            ("temporal_window_days", self.temporal_window_days),
            ("age_ramp_days", self.age_ramp_days),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidPolicy {
                    field: field.to_string(),
                    reason: format!("{value} must be finite and positive"),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.factual_confidence_floor) {
            return Err(ConfigError::InvalidPolicy {
                field: "factual_confidence_floor".to_string(),
                reason: format!("{} must lie in [0, 1]", self.factual_confidence_floor),
            });
        }
        Ok(())
    }

    /// Merge a partial update into a copy of this config. The result is not validated.
    pub fn merged(&self, update: &CorruptionConfigUpdate) -> Self {
        Self {
            decay_threshold: update.decay_threshold.unwrap_or(self.decay_threshold),
            quarantine_threshold: update
                .quarantine_threshold
                .unwrap_or(self.quarantine_threshold),
            max_history_entries: update
                .max_history_entries
                .unwrap_or(self.max_history_entries),
            assessment_interval_secs: update
                .assessment_interval_secs
                .unwrap_or(self.assessment_interval_secs),
            auto_quarantine: update.auto_quarantine.unwrap_or(self.auto_quarantine),
            temporal_window_days: update
                .temporal_window_days
                .unwrap_or(self.temporal_window_days),
            age_ramp_days: update.age_ramp_days.unwrap_or(self.age_ramp_days),
            factual_confidence_floor: update
                .factual_confidence_floor
                .unwrap_or(self.factual_confidence_floor),
        }
    }
}

/// Partial corruption config; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorruptionConfigUpdate {
    pub decay_threshold: Option<f64>,
    pub quarantine_threshold: Option<f64>,
    pub max_history_entries: Option<usize>,
    pub assessment_interval_secs: Option<u64>,
    pub auto_quarantine: Option<bool>,
    pub temporal_window_days: Option<f64>,
    pub age_ramp_days: Option<f64>,
    pub factual_confidence_floor: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_collapse_decayed_band() {
        let config = CorruptionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.decay_threshold, config.quarantine_threshold);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let config = CorruptionConfig {
            decay_threshold: 0.8,
            quarantine_threshold: 0.6,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidThresholds {
                decay: 0.8,
                quarantine: 0.6
            })
        );
    }

    #[test]
    fn rejects_threshold_above_one() {
        let config = CorruptionConfig {
            quarantine_threshold: 1.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn merge_only_touches_present_fields() {
        let base = CorruptionConfig::default();
        let merged = base.merged(&CorruptionConfigUpdate {
            decay_threshold: Some(0.4),
            auto_quarantine: Some(false),
            ..Default::default()
        });
        assert_eq!(merged.decay_threshold, 0.4);
        assert!(!merged.auto_quarantine);
        assert_eq!(merged.quarantine_threshold, base.quarantine_threshold);
        assert_eq!(merged.assessment_interval_secs, base.assessment_interval_secs);
    }
}
