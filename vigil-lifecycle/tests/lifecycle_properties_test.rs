mod support;

use std::collections::HashMap;

use chrono::Utc;
use proptest::prelude::*;
use vigil_lifecycle::TrustLifecycle;

use support::{node, CountingStrategy};

#[derive(Debug, Clone)]
enum Op {
    Insert(u8),
    Remove(u8),
    Assess(u8),
    Sweep,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..5).prop_map(Op::Insert),
        (0u8..5).prop_map(Op::Remove),
        (0u8..5).prop_map(Op::Assess),
        Just(Op::Sweep),
    ]
}

proptest! {
    #[test]
    fn registry_matches_sequential_model(ops in proptest::collection::vec(op(), 0..40)) {
        let lifecycle = TrustLifecycle::new(CountingStrategy);
        let mut model: HashMap<String, u64> = HashMap::new();
        let mut assessments = 0u64;
        let now = Utc::now();

        for op in ops {
            match op {
                Op::Insert(n) => {
                    let id = format!("m{n}");
                    let replaced = lifecycle.insert(node(&id), 0);
                    prop_assert_eq!(replaced, model.insert(id, 0).is_some());
                }
                Op::Remove(n) => {
                    let id = format!("m{n}");
                    prop_assert_eq!(lifecycle.remove(&id), model.remove(&id).is_some());
                }
                Op::Assess(n) => {
                    let id = format!("m{n}");
                    match model.get_mut(&id) {
                        Some(count) => {
                            *count += 1;
                            assessments += 1;
                            prop_assert_eq!(lifecycle.assess(&id, &(), now).ok(), Some(*count));
                        }
                        None => prop_assert!(lifecycle.assess(&id, &(), now).is_err()),
                    }
                }
                Op::Sweep => {
                    let report = lifecycle.sweep(now);
                    prop_assert_eq!(report.assessed, model.len());
                    prop_assert_eq!(report.failed, 0);
                    for count in model.values_mut() {
                        *count += 1;
                    }
                    assessments += model.len() as u64;
                }
            }
        }

        prop_assert_eq!(lifecycle.len(), model.len());
        prop_assert_eq!(lifecycle.stats().assessments, assessments);
        for (id, count) in &model {
            prop_assert_eq!(lifecycle.get(id).map(|entry| entry.state), Some(*count));
        }
    }
}
