//! # Metrics
//!
//! Prometheus metrics for the resource generators.
//!
//! ## Metrics Exposed
//!
//! - `ocm_log_forwarder_generations_total` - Generation runs by pipeline
//! - `ocm_log_forwarder_generation_errors_total` - Failed generation runs by pipeline
//! - `ocm_log_forwarder_generation_duration_seconds` - Duration of generation runs
//! - `ocm_log_forwarder_resources_generated_total` - Resources returned by kind
//! - `ocm_log_forwarder_mutation_failures_total` - Structural or conversion failures in mutators
//!
//! The generators only record. The process embedding the library must call
//! [`register_metrics`] once at startup and expose [`REGISTRY`] itself; until
//! then the collectors count but are not gathered. `ocmlogctl` and `crdgen`
//! are one-shot and never register.

use anyhow::Result;
use prometheus::{Histogram, IntCounter, IntCounterVec, Registry};
use std::sync::LazyLock;

pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static GENERATIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "ocm_log_forwarder_generations_total",
            "Total number of generation runs by pipeline",
        ),
        &["pipeline"],
    )
    .expect("Failed to create GENERATIONS_TOTAL metric - this should never happen")
});

static GENERATION_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "ocm_log_forwarder_generation_errors_total",
            "Total number of failed generation runs by pipeline",
        ),
        &["pipeline"],
    )
    .expect("Failed to create GENERATION_ERRORS_TOTAL metric - this should never happen")
});

static GENERATION_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "ocm_log_forwarder_generation_duration_seconds",
            "Duration of generation runs in seconds",
        )
        .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05]),
    )
    .expect("Failed to create GENERATION_DURATION metric - this should never happen")
});

static RESOURCES_GENERATED_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "ocm_log_forwarder_resources_generated_total",
            "Total number of generated resources by kind",
        ),
        &["kind"],
    )
    .expect("Failed to create RESOURCES_GENERATED_TOTAL metric - this should never happen")
});

static MUTATION_FAILURES_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "ocm_log_forwarder_mutation_failures_total",
        "Total number of structural or conversion failures while mutating resources",
    )
    .expect("Failed to create MUTATION_FAILURES_TOTAL metric - this should never happen")
});

/// Register every collector with [`REGISTRY`].
///
/// # Errors
///
/// Fails when the collectors are already registered.
pub fn register_metrics() -> Result<()> {
    REGISTRY.register(Box::new(GENERATIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(GENERATION_ERRORS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(GENERATION_DURATION.clone()))?;
    REGISTRY.register(Box::new(RESOURCES_GENERATED_TOTAL.clone()))?;
    REGISTRY.register(Box::new(MUTATION_FAILURES_TOTAL.clone()))?;

    Ok(())
}

pub fn increment_generations(pipeline: &str) {
    GENERATIONS_TOTAL.with_label_values(&[pipeline]).inc();
}

pub fn increment_generation_errors(pipeline: &str) {
    GENERATION_ERRORS_TOTAL.with_label_values(&[pipeline]).inc();
}

pub fn observe_generation_duration(duration: f64) {
    GENERATION_DURATION.observe(duration);
}

pub fn increment_resources_generated(kind: &str) {
    RESOURCES_GENERATED_TOTAL.with_label_values(&[kind]).inc();
}

pub fn increment_mutation_failures() {
    MUTATION_FAILURES_TOTAL.inc();
}
