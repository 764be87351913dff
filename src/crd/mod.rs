//! # Custom Resource Definitions
//!
//! CRD types read by the resource generators.
//!
//! ## Module Structure
//!
//! - `forwarder.rs` - `OCMLogForwarder`, a single namespaced forwarder
//! - `forwarder_config.rs` - `OCMLogForwarderConfig`, the cluster-scoped collection
//! - `backend.rs` - Backend configuration shared by both kinds
//! - `status.rs` - Status shape shared by both kinds

mod backend;
mod forwarder;
mod forwarder_config;
mod status;

pub use backend::{BackendSpec, BackendType, ElasticSearchAuthType, ElasticSearchSpec};
pub use forwarder::{
    default_forwarder_version, default_ocm_secret_ref, default_poll_interval_minutes,
    CollectionReference, OcmLogForwarder, OcmLogForwarderSpec, OcmSpec,
};
pub use forwarder_config::{
    default_forwarder_namespace, OcmLogForwarderConfig, OcmLogForwarderConfigSpec, Provider,
};
pub use status::{ChildResource, PhaseCondition, WorkloadStatus};
