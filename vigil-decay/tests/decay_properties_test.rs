use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use vigil_core::config::DecayPolicy;
use vigil_core::memory::MemoryNode;
use vigil_decay::decay;

fn arb_category() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("core"),
        Just("standard"),
        Just("ephemeral"),
        Just("uncategorized"),
    ]
}

fn make_memory(
    trust: f64,
    usage_count: u64,
    importance: f64,
    decay_rate: f64,
    category: &str,
    minutes_idle: i64,
) -> (MemoryNode, chrono::DateTime<Utc>) {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let mut node = MemoryNode::new("p", "payload", now - Duration::minutes(minutes_idle))
        .with_trust(trust)
        .with_importance(importance)
        .with_decay_rate(decay_rate)
        .with_category(category);
    node.usage_count = usage_count;
    (node, now)
}

proptest! {
    #[test]
    fn decay_is_deterministic(
        trust in 0.0f64..=1.0,
        usage in 0u64..10_000,
        importance in 0.0f64..=1.0,
        rate in 0.0001f64..1.0,
        category in arb_category(),
        idle in 0i64..1_000_000,
    ) {
        let (node, now) = make_memory(trust, usage, importance, rate, category, idle);
        let policy = DecayPolicy::default();
        prop_assert_eq!(decay(&node, now, &policy), decay(&node, now, &policy));
    }

    #[test]
    fn trust_stays_in_unit_range(
        trust in -1.0f64..2.0,
        usage in 0u64..10_000,
        importance in 0.0f64..=1.0,
        rate in 0.0001f64..5.0,
        category in arb_category(),
        idle in -10_000i64..10_000_000,
    ) {
        let (node, now) = make_memory(trust, usage, importance, rate, category, idle);
        let result = decay(&node, now, &DecayPolicy::default());
        let value = result.new_trust.value();
        prop_assert!((0.0..=1.0).contains(&value));
        // Rounding may lift the value by at most half a unit in the last place.
        prop_assert!(value <= node.trust_score.value() + 0.0005);
    }

    #[test]
    fn adjusted_rate_respects_floor_and_ceiling(
        usage in 0u64..10_000,
        importance in 0.0f64..=1.0,
        rate in 0.0001f64..5.0,
        category in arb_category(),
    ) {
        let (node, now) = make_memory(1.0, usage, importance, rate, category, 60);
        let policy = DecayPolicy::default();
        let result = decay(&node, now, &policy);
        prop_assert!(result.adjusted_rate >= 0.001);
        prop_assert!(result.adjusted_rate <= policy.max_decay_per_day);
    }

    #[test]
    fn trust_is_rounded_to_three_places(
        trust in 0.0f64..=1.0,
        idle in 0i64..200_000,
    ) {
        let (node, now) = make_memory(trust, 0, 0.0, 0.03, "standard", idle);
        let value = decay(&node, now, &DecayPolicy::default()).new_trust.value();
        let scaled = value * 1000.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }
}
