use std::time::Duration;

use chrono::Utc;
use vigil_core::config::{CorruptionConfig, CorruptionConfigUpdate};
use vigil_core::memory::ValidationLevel;
use vigil_corruption::CorruptionDetector;

fn seeded(interval_secs: u64) -> CorruptionDetector {
    let detector = CorruptionDetector::new(CorruptionConfig {
        assessment_interval_secs: interval_secs,
        ..Default::default()
    })
    .unwrap();
    let now = Utc::now();
    for id in ["a", "b", "c"] {
        detector.register_memory_at(
            id,
            "x",
            test_fixtures::provenance(0.9, ValidationLevel::Basic, now),
            now,
        );
    }
    detector
}

#[test]
fn nothing_runs_until_started() {
    let detector = seeded(1);
    assert!(!detector.is_running());
    assert!(!detector.stop());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn periodic_sweep_assesses_every_memory() {
    let detector = seeded(1);
    detector.start().unwrap();
    assert!(detector.is_running());

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    detector.shutdown().await.unwrap();
    assert!(!detector.is_running());

    let stats = detector.get_corruption_statistics().statistics;
    assert!(stats.total_assessments >= 3);
    assert_eq!(stats.total_assessments % 3, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn interval_change_restarts_the_sweep_once() {
    let detector = seeded(3_600);
    detector.start().unwrap();
    assert_eq!(detector.sweep_interval(), Some(Duration::from_secs(3_600)));

    detector
        .update_config(CorruptionConfigUpdate {
            assessment_interval_secs: Some(1),
            ..Default::default()
        })
        .unwrap();
    assert!(detector.is_running());
    assert_eq!(detector.sweep_interval(), Some(Duration::from_secs(1)));

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    let stats = detector.get_corruption_statistics().statistics;
    // One timer at one second: exactly one sweep of three memories so far.
    assert_eq!(stats.total_assessments, 3);

    assert!(detector.stop());
    assert!(!detector.stop());
}

#[tokio::test]
async fn non_interval_update_keeps_the_running_sweep() {
    let detector = seeded(3_600);
    detector.start().unwrap();
    detector
        .update_config(CorruptionConfigUpdate {
            auto_quarantine: Some(false),
            ..Default::default()
        })
        .unwrap();
    assert!(detector.is_running());
    assert_eq!(detector.sweep_interval(), Some(Duration::from_secs(3_600)));
    detector.shutdown().await.unwrap();
}

#[tokio::test]
async fn interval_update_while_stopped_does_not_start() {
    let detector = seeded(60);
    detector
        .update_config(CorruptionConfigUpdate {
            assessment_interval_secs: Some(5),
            ..Default::default()
        })
        .unwrap();
    assert!(!detector.is_running());
    assert_eq!(detector.config().assessment_interval_secs, 5);
}

#[test]
fn start_without_runtime_fails() {
    let detector = seeded(60);
    assert!(detector.start().is_err());
    assert!(!detector.is_running());
}
