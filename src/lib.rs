//! OCM Log Forwarder Operator Library
//!
//! Generates the Kubernetes resources behind `OCMLogForwarder` and
//! `OCMLogForwarderConfig` custom resources. Generation is a pure transform:
//! nothing here talks to an API server. The reconciling control plane, or the
//! `ocmlogctl` CLI, feeds in the custom resources and persists or prints what
//! comes back.
//!
//! ```no_run
//! use ocm_log_forwarder::prelude::*;
//!
//! # fn run(workload: &str) -> Result<(), GenerateError> {
//! let resources = forwarder::generate_for_cli(workload, None)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod crd;
pub mod error;
pub mod forwarder;
pub mod forwarder_config;
pub mod manifest;
pub mod observability;
pub mod prelude;
pub mod resources;
pub mod samples;
pub mod validation;
pub mod workload;

pub use crd::{OcmLogForwarder, OcmLogForwarderConfig};
pub use error::GenerateError;
