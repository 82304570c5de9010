use vigil_core::config::DecayPolicy;
use vigil_core::memory::MemoryNode;

/// Usage rate reduction.
///
/// Formula: `min(usage_bonus_cap, usage_count × usage_bonus)`
///
/// Frequently used memories decay slower, up to the cap.
pub fn calculate(node: &MemoryNode, policy: &DecayPolicy) -> f64 {
    (node.usage_count as f64 * policy.usage_bonus).min(policy.usage_bonus_cap)
}
