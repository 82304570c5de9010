use vigil_core::config::DecayPolicy;
use vigil_core::memory::MemoryNode;

/// Importance rate reduction: `importance × importance_bonus`.
pub fn calculate(node: &MemoryNode, policy: &DecayPolicy) -> f64 {
    node.importance * policy.importance_bonus
}
