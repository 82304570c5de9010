//! # vigil-observability
//!
//! Tracing subscriber setup and the span vocabulary shared by the engine crates.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, spans::names};
