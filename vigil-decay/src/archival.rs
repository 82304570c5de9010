use vigil_core::memory::{MemoryNode, TrustStatus};

/// Archival decision with metadata for audit logging.
///
/// A memory is archive-eligible once its trust reaches the lowest decay
/// bucket. Eligibility is advisory: nothing here removes the memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivalDecision {
    pub memory_id: String,
    pub should_archive: bool,
    pub trust: f64,
    pub status: TrustStatus,
    pub reason: String,
}

/// Evaluate archival eligibility for a node at its current trust.
pub fn evaluate(node: &MemoryNode) -> ArchivalDecision {
    let status = node.trust_score.status();
    let should_archive = status == TrustStatus::ArchiveEligible;
    let reason = if should_archive {
        format!(
            "trust {} at or below {:.3} in category {}",
            node.trust_score,
            vigil_core::memory::TrustScore::COOL,
            node.category
        )
    } else {
        format!("trust {} is {}", node.trust_score, status)
    };

    ArchivalDecision {
        memory_id: node.id.clone(),
        should_archive,
        trust: node.trust_score.value(),
        status,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn low_trust_is_archive_eligible() {
        let node = MemoryNode::new("m", "x", Utc::now()).with_trust(0.2);
        let decision = evaluate(&node);
        assert!(decision.should_archive);
        assert!(decision.reason.contains("0.200"));
    }

    #[test]
    fn warm_memory_is_kept() {
        let node = MemoryNode::new("m", "x", Utc::now()).with_trust(0.7);
        let decision = evaluate(&node);
        assert!(!decision.should_archive);
        assert_eq!(decision.status, TrustStatus::Warm);
    }
}
