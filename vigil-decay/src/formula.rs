use chrono::{DateTime, Utc};
use vigil_core::config::DecayPolicy;
use vigil_core::constants::MIN_DECAY_PER_DAY;
use vigil_core::memory::{MemoryNode, TrustScore};
use vigil_core::models::DecayResult;

use crate::factors;

/// Linear inactivity decay.
///
/// ```text
/// adjustedRate = clamp((decayRate − usageBonus − importanceBonus) × categoryMultiplier,
///                      0.001, maxDecayPerDay)
/// newTrust     = round3(clamp(trust − daysInactive × adjustedRate, 0, 1))
/// ```
///
/// Pure: identical `(node, now, policy)` always yields an identical result,
/// and `node.last_accessed` is never touched.
pub fn decay(node: &MemoryNode, now: DateTime<Utc>, policy: &DecayPolicy) -> DecayResult {
    let breakdown = compute_breakdown(node, now, policy);
    let new_trust = TrustScore::rounded(node.trust_score.value() - breakdown.decay_amount);

    DecayResult {
        memory_id: node.id.clone(),
        previous_trust: node.trust_score,
        new_trust,
        days_inactive: breakdown.days_inactive,
        adjusted_rate: breakdown.adjusted_rate,
        decay_amount: breakdown.decay_amount,
        status: new_trust.status(),
        computed_at: now,
    }
}

/// Each input of the decay computation, for debugging and observability.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayBreakdown {
    pub days_inactive: f64,
    pub usage_bonus: f64,
    pub importance_bonus: f64,
    pub category_multiplier: f64,
    pub adjusted_rate: f64,
    pub decay_amount: f64,
}

/// Compute decay with a full breakdown of each factor.
pub fn compute_breakdown(
    node: &MemoryNode,
    now: DateTime<Utc>,
    policy: &DecayPolicy,
) -> DecayBreakdown {
    let days_inactive = factors::inactivity::days_inactive(node, now);
    let usage_bonus = factors::usage::calculate(node, policy);
    let importance_bonus = factors::importance::calculate(node, policy);
    let category_multiplier = factors::category::calculate(node, policy);

    // max/min rather than clamp: a ceiling below the floor must not panic.
    let adjusted_rate = ((node.decay_rate - usage_bonus - importance_bonus) * category_multiplier)
        .max(MIN_DECAY_PER_DAY)
        .min(policy.max_decay_per_day);

    DecayBreakdown {
        days_inactive,
        usage_bonus,
        importance_bonus,
        category_multiplier,
        adjusted_rate,
        decay_amount: days_inactive * adjusted_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn node_at(now: DateTime<Utc>) -> MemoryNode {
        MemoryNode::new("n", "payload", now)
            .with_trust(0.9)
            .with_importance(0.0)
            .with_decay_rate(0.01)
    }

    #[test]
    fn zero_inactivity_means_zero_decay() {
        let now = Utc::now();
        let result = decay(&node_at(now), now, &DecayPolicy::default());
        assert_eq!(result.decay_amount, 0.0);
        assert_eq!(result.new_trust.value(), 0.9);
    }

    #[test]
    fn rate_never_drops_below_floor() {
        let now = Utc::now();
        let mut node = node_at(now - Duration::days(10)).with_importance(1.0);
        node.usage_count = 10_000;
        node.decay_rate = 0.001;
        let breakdown = compute_breakdown(&node, now, &DecayPolicy::default());
        assert_eq!(breakdown.adjusted_rate, MIN_DECAY_PER_DAY);
        assert!((breakdown.decay_amount - 0.01).abs() < 1e-9);
    }

    #[test]
    fn future_access_time_does_not_increase_trust() {
        let now = Utc::now();
        let node = node_at(now + Duration::days(2));
        let result = decay(&node, now, &DecayPolicy::default());
        assert_eq!(result.days_inactive, 0.0);
        assert_eq!(result.new_trust, node.trust_score);
    }

    #[test]
    fn category_multiplier_scales_rate() {
        let now = Utc::now();
        let policy = DecayPolicy::default();
        let base = node_at(now - Duration::days(4));
        let standard = compute_breakdown(&base, now, &policy);
        let ephemeral = compute_breakdown(&base.clone().with_category("ephemeral"), now, &policy);
        assert!((ephemeral.adjusted_rate - 2.0 * standard.adjusted_rate).abs() < 1e-12);
    }
}
