use vigil_core::memory::MemoryProvenance;

/// Per-attestation contribution of the chain of trust.
const CHAIN_STEP: f64 = 0.05;
/// Cap on the chain-of-trust contribution.
const CHAIN_CAP: f64 = 0.3;
/// Weight of missing confidence.
const CONFIDENCE_WEIGHT: f64 = 0.3;

/// `base(validation) + (1 − confidence) × 0.3 + min(0.3, chain × 0.05)`, clamped to 1.
pub fn weakness(provenance: &MemoryProvenance) -> f64 {
    let confidence = provenance.confidence.clamp(0.0, 1.0);
    let chain = (provenance.chain_of_trust.len() as f64 * CHAIN_STEP).min(CHAIN_CAP);
    let raw = provenance.validation_level.base_weakness()
        + (1.0 - confidence) * CONFIDENCE_WEIGHT
        + chain;
    raw.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vigil_core::memory::{MemorySource, ValidationLevel};

    fn prov(confidence: f64, level: ValidationLevel, chain: usize) -> MemoryProvenance {
        MemoryProvenance::new(MemorySource::Imported, confidence, level, Utc::now())
            .with_chain((0..chain).map(|i| format!("attestation-{i}")))
    }

    #[test]
    fn verified_high_confidence() {
        let w = weakness(&prov(0.9, ValidationLevel::Verified, 0));
        assert!((w - 0.03).abs() < 1e-12);
    }

    #[test]
    fn chain_contribution_is_capped() {
        let six = weakness(&prov(1.0, ValidationLevel::Thorough, 6));
        let twenty = weakness(&prov(1.0, ValidationLevel::Thorough, 20));
        assert!((six - 0.4).abs() < 1e-12);
        assert_eq!(six, twenty);
    }

    #[test]
    fn clamped_to_one() {
        let w = weakness(&prov(0.0, ValidationLevel::None, 10));
        assert_eq!(w, 1.0);
    }
}
