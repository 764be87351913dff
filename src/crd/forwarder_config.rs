//! # OCMLogForwarderConfig
//!
//! Cluster-scoped collection providing the shared namespace, service account,
//! RBAC and backend for every forwarder that references it.

use crate::constants::DEFAULT_FORWARDER_NAMESPACE;
use crate::crd::{BackendSpec, WorkloadStatus};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(CustomResource, Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "OCMLogForwarderConfig",
    group = "apps.dustinscott.io",
    version = "v1alpha1",
    root = "OcmLogForwarderConfig",
    status = "WorkloadStatus",
    shortname = "olfc",
    printcolumn = r#"{"name":"Namespace", "type":"string", "jsonPath":".spec.forwarderNamespace"}, {"name":"Created", "type":"boolean", "jsonPath":".status.created"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct OcmLogForwarderConfigSpec {
    /// Managed OpenShift flavour the forwarders run against
    #[serde(default)]
    pub provider: Provider,
    /// Namespace holding the forwarders and their shared RBAC
    #[serde(default = "default_forwarder_namespace")]
    pub forwarder_namespace: String,
    /// Backend used by every forwarder in the collection
    #[serde(default)]
    pub backend: BackendSpec,
}

impl Default for OcmLogForwarderConfigSpec {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            forwarder_namespace: default_forwarder_namespace(),
            backend: BackendSpec::default(),
        }
    }
}

impl OcmLogForwarderConfig {
    #[must_use]
    pub fn workload_name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Red Hat OpenShift Service on AWS
    #[default]
    Rosa,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rosa => write!(f, "rosa"),
        }
    }
}

pub fn default_forwarder_namespace() -> String {
    DEFAULT_FORWARDER_NAMESPACE.to_string()
}
