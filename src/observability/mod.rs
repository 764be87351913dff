//! # Observability
//!
//! - `metrics`: Prometheus counters recorded by the generators
//! - `logging`: `tracing` subscriber setup for the binaries

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::register_metrics;
