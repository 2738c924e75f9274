//! # prefetch-observability
//!
//! Tracing subscriber setup and the span definitions shared by the graph and
//! strategy crates.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, try_init_from_config};
