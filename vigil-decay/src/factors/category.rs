use vigil_core::config::DecayPolicy;
use vigil_core::memory::MemoryNode;

/// Category multiplier; categories without an entry decay at 1.0×.
pub fn calculate(node: &MemoryNode, policy: &DecayPolicy) -> f64 {
    policy.category_multiplier(&node.category)
}
