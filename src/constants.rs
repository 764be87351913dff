//! # Constants
//!
//! Shared constants used throughout the resource generators.
//!
//! The values in [`FORWARDER`] are referenced by the RBAC resources as well as
//! the forwarder environment. Changing any of them breaks the permission
//! bindings of already-deployed forwarders.

/// API group of both custom resources
pub const API_GROUP: &str = "apps.dustinscott.io";

/// Every API version served for the custom resources, oldest first
pub const API_VERSIONS: &[&str] = &["v1alpha1"];

/// Newest served API version, used when `latest` is requested
pub const LATEST_API_VERSION: &str = "v1alpha1";

/// Only backend type supported by the forwarder today
pub const BACKEND_TYPE_ELASTICSEARCH: &str = "elasticsearch";

/// Default forwarder image tag
pub const DEFAULT_FORWARDER_VERSION: &str = "latest";

/// Default OCM poll interval (minutes)
pub const DEFAULT_POLL_INTERVAL_MINUTES: u32 = 5;

/// Minimum OCM poll interval (minutes)
pub const MIN_POLL_INTERVAL_MINUTES: u32 = 1;

/// Maximum OCM poll interval (minutes), one day
pub const MAX_POLL_INTERVAL_MINUTES: u32 = 1440;

/// Default ElasticSearch endpoint
pub const DEFAULT_ELASTICSEARCH_URL: &str =
    "https://elasticsearch-es-http.elastic-system.svc.cluster.local:9200";

/// Default ElasticSearch index for service logs
pub const DEFAULT_ELASTICSEARCH_INDEX: &str = "ocm_service_logs";

/// ElasticSearch index names longer than this are rejected
pub const MAX_ELASTICSEARCH_INDEX_LENGTH: usize = 128;

/// Default namespace for collection-managed forwarders
pub const DEFAULT_FORWARDER_NAMESPACE: &str = "ocm-log-forwarder";

/// Namespace assumed for a forwarder manifest that does not set one
pub const DEFAULT_WORKLOAD_NAMESPACE: &str = "default";

/// Field path resolved by the kubelet to the pod's own namespace
pub const POD_NAMESPACE_FIELD_PATH: &str = "metadata.namespace";

/// Fixed names shared between the forwarder workload and its RBAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwarderConstants {
    /// Secret holding the OCM API token. Must pre-exist.
    pub ocm_secret_name: &'static str,
    /// Secret holding the ElasticSearch basic auth pair. Must pre-exist.
    pub elastic_secret_name: &'static str,
    /// Name of the forwarder container inside the Deployment
    pub container_name: &'static str,
    /// Image repository, the tag comes from `spec.forwarderVersion`
    pub image_repository: &'static str,
    /// Label key carrying the workload name
    pub name_label: &'static str,
    /// Suffix of the Role/RoleBinding granting access to the OCM secret
    pub ocm_rbac_suffix: &'static str,
    /// Suffix of the Role/RoleBinding granting access to the ElasticSearch secret
    pub elastic_rbac_suffix: &'static str,
}

/// Process-wide forwarder constants.
pub static FORWARDER: ForwarderConstants = ForwarderConstants {
    ocm_secret_name: "ocm-token",
    elastic_secret_name: "elastic-auth",
    container_name: "forwarder",
    image_repository: "ghcr.io/scottd018/ocm-log-forwarder",
    name_label: "app.kubernetes.io/name",
    ocm_rbac_suffix: "ocm",
    elastic_rbac_suffix: "elastic",
};

impl ForwarderConstants {
    /// Full image reference for a forwarder version
    #[must_use]
    pub fn image(&self, version: &str) -> String {
        format!("{}:{version}", self.image_repository)
    }

    /// Name of the OCM secret Role/RoleBinding for a workload
    #[must_use]
    pub fn ocm_rbac_name(&self, workload: &str) -> String {
        format!("{workload}-{}", self.ocm_rbac_suffix)
    }

    /// Name of the ElasticSearch secret Role/RoleBinding for a workload
    #[must_use]
    pub fn elastic_rbac_name(&self, workload: &str) -> String {
        format!("{workload}-{}", self.elastic_rbac_suffix)
    }
}
