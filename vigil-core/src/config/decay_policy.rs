use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MIN_DECAY_PER_DAY;
use crate::errors::ConfigError;

/// Decay policy: how fast trust erodes as a function of inactivity,
/// usage, importance, and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayPolicy {
    /// Per-use reduction of the daily decay rate.
    pub usage_bonus: f64,
    /// Upper bound on the total usage reduction.
    pub usage_bonus_cap: f64,
    /// Rate reduction at importance 1.0, scaled linearly by importance.
    pub importance_bonus: f64,
    /// Ceiling on the adjusted daily decay rate.
    pub max_decay_per_day: f64,
    /// Multiplier applied to the adjusted rate per category. Missing categories use 1.0.
    pub category_multipliers: HashMap<String, f64>,
    /// Trust added by an explicit refresh, capped at 1.0.
    pub refresh_boost: f64,
    /// Interval between background decay sweeps (seconds).
    pub sweep_interval_secs: u64,
    /// Maximum retained decay history entries per memory.
    pub max_history_entries: usize,
}

impl Default for DecayPolicy {
    fn default() -> Self {
        Self {
            usage_bonus: defaults::DEFAULT_USAGE_BONUS,
            usage_bonus_cap: defaults::DEFAULT_USAGE_BONUS_CAP,
            importance_bonus: defaults::DEFAULT_IMPORTANCE_BONUS,
            max_decay_per_day: defaults::DEFAULT_MAX_DECAY_PER_DAY,
            category_multipliers: defaults::DEFAULT_CATEGORY_MULTIPLIERS
                .iter()
                .map(|(name, m)| (name.to_string(), *m))
                .collect(),
            refresh_boost: defaults::DEFAULT_REFRESH_BOOST,
            sweep_interval_secs: defaults::DEFAULT_DECAY_SWEEP_INTERVAL_SECS,
            max_history_entries: defaults::DEFAULT_DECAY_HISTORY_ENTRIES,
        }
    }
}

impl DecayPolicy {
    /// Multiplier for a category, 1.0 when the category has none.
    pub fn category_multiplier(&self, category: &str) -> f64 {
        self.category_multipliers
            .get(category)
            .copied()
            .unwrap_or(1.0)
    }

    /// Sweep interval as a `Duration`.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Reject policies that would make the decay arithmetic meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("usage_bonus", self.usage_bonus)?;
        non_negative("usage_bonus_cap", self.usage_bonus_cap)?;
        non_negative("importance_bonus", self.importance_bonus)?;
        non_negative("refresh_boost", self.refresh_boost)?;

        if !self.max_decay_per_day.is_finite() || self.max_decay_per_day < MIN_DECAY_PER_DAY {
            return Err(ConfigError::InvalidPolicy {
                field: "max_decay_per_day".to_string(),
                reason: format!(
                    "{} is below the minimum daily rate {MIN_DECAY_PER_DAY}",
                    self.max_decay_per_day
                ),
            });
        }

        for (category, multiplier) in &self.category_multipliers {
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                return Err(ConfigError::InvalidPolicy {
                    field: format!("category_multipliers.{category}"),
                    reason: format!("{multiplier} must be finite and positive"),
                });
            }
        }

        if self.sweep_interval_secs == 0 {
            return Err(ConfigError::InvalidInterval { component: "decay" });
        }
        if self.max_history_entries == 0 {
            return Err(ConfigError::InvalidHistoryCap { component: "decay" });
        }
        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidPolicy {
            field: field.to_string(),
            reason: format!("{value} must be finite and non-negative"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        assert!(DecayPolicy::default().validate().is_ok());
    }

    #[test]
    fn unknown_category_uses_neutral_multiplier() {
        let policy = DecayPolicy::default();
        assert_eq!(policy.category_multiplier("standard"), 1.0);
        assert_eq!(policy.category_multiplier("no-such-category"), 1.0);
        assert_eq!(policy.category_multiplier("core"), 0.5);
    }

    #[test]
    fn rejects_max_rate_below_floor() {
        let policy = DecayPolicy {
            max_decay_per_day: 0.0005,
            ..Default::default()
        };
        assert!(matches!(
            policy.validate(),
            Err(ConfigError::InvalidPolicy { field, .. }) if field == "max_decay_per_day"
        ));
    }

    #[test]
    fn rejects_zero_multiplier() {
        let mut policy = DecayPolicy::default();
        policy.category_multipliers.insert("frozen".to_string(), 0.0);
        assert!(policy.validate().is_err());
    }

    #[test]
    fn rejects_zero_interval() {
        let policy = DecayPolicy {
            sweep_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            policy.validate(),
            Err(ConfigError::InvalidInterval { component: "decay" })
        );
    }
}
