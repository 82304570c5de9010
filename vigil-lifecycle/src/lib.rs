//! # vigil-lifecycle
//!
//! One generic trust-lifecycle component, parameterized by an
//! [`ITrustStrategy`](vigil_core::ITrustStrategy). It owns the registry,
//! runs each assessment atomically per item, sweeps the registry with
//! per-item failure isolation, and schedules sweeps on a cancellable task.

pub mod lifecycle;
pub mod registry;
pub mod scheduler;

pub use lifecycle::TrustLifecycle;
pub use registry::{Registry, TrustEntry};
pub use scheduler::SweepScheduler;
