//! # OCMLogForwarder
//!
//! A single forwarder polling service logs for one OCM cluster.

use crate::constants::{
    DEFAULT_FORWARDER_VERSION, DEFAULT_POLL_INTERVAL_MINUTES, DEFAULT_WORKLOAD_NAMESPACE,
    FORWARDER,
};
use crate::crd::{BackendSpec, WorkloadStatus};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "OCMLogForwarder",
    group = "apps.dustinscott.io",
    version = "v1alpha1",
    root = "OcmLogForwarder",
    namespaced,
    status = "WorkloadStatus",
    shortname = "olf",
    printcolumn = r#"{"name":"Version", "type":"string", "jsonPath":".spec.forwarderVersion"}, {"name":"Created", "type":"boolean", "jsonPath":".status.created"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct OcmLogForwarderSpec {
    /// Optional reference to the OCMLogForwarderConfig collection owning this forwarder.
    /// When set, the collection supplies the backend, namespace and service account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionReference>,
    /// Forwarder image tag
    #[serde(default = "default_forwarder_version")]
    pub forwarder_version: String,
    /// OpenShift Cluster Manager connection settings
    pub ocm: OcmSpec,
    /// Destination for the forwarded service logs
    #[serde(default)]
    pub backend: BackendSpec,
    /// Enable debug logging in the forwarder
    #[serde(default)]
    pub debug: bool,
}

/// Reference to the collection a forwarder belongs to
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OcmSpec {
    /// Cluster ID in OpenShift Cluster Manager
    pub cluster_id: String,
    /// How often to poll for new service logs.
    /// The wire name is kept as shipped by the first API version.
    #[serde(
        rename = "pollInternalMinutes",
        default = "default_poll_interval_minutes"
    )]
    #[schemars(range(min = 1, max = 1440))]
    pub poll_interval_minutes: u32,
    /// Secret holding the OCM API token, in the forwarder's namespace
    #[serde(default = "default_ocm_secret_ref")]
    pub secret_ref: String,
}

pub fn default_forwarder_version() -> String {
    DEFAULT_FORWARDER_VERSION.to_string()
}

pub fn default_poll_interval_minutes() -> u32 {
    DEFAULT_POLL_INTERVAL_MINUTES
}

pub fn default_ocm_secret_ref() -> String {
    FORWARDER.ocm_secret_name.to_string()
}

impl OcmLogForwarder {
    #[must_use]
    pub fn workload_name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// Namespace of the forwarder, `default` when the manifest omits it
    #[must_use]
    pub fn workload_namespace(&self) -> &str {
        self.metadata
            .namespace
            .as_deref()
            .unwrap_or(DEFAULT_WORKLOAD_NAMESPACE)
    }
}

impl OcmLogForwarderSpec {
    /// Whether the forwarder is managed by an OCMLogForwarderConfig collection
    #[must_use]
    pub fn is_collection_scoped(&self) -> bool {
        self.collection.is_some()
    }
}
