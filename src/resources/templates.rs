//! Descriptor templates shared by the forwarder and collection pipelines.
//!
//! Templates interpolate values without validating them. Both forwarder
//! Deployment variants go through [`deployment`] so the env list is identical
//! in size and order.

use crate::constants::{FORWARDER, POD_NAMESPACE_FIELD_PATH};
use crate::resources::ResourceDescriptor;
use serde_json::{json, Value};

const RBAC_API_VERSION: &str = "rbac.authorization.k8s.io/v1";
const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

/// Env var names of the forwarder container, in emission order
pub const FORWARDER_ENV_NAMES: [&str; 11] = [
    "OCM_CLUSTER_ID",
    "OCM_POLL_INTERVAL_MINUTES",
    "OCM_SECRET_NAME",
    "OCM_SECRET_NAMESPACE",
    "BACKEND_TYPE",
    "BACKEND_ES_URL",
    "BACKEND_ES_AUTH_TYPE",
    "BACKEND_ES_INDEX",
    "BACKEND_ES_SECRET_NAME",
    "BACKEND_ES_SECRET_NAMESPACE",
    "DEBUG",
];

pub fn namespace(name: &str) -> ResourceDescriptor {
    ResourceDescriptor::new(json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name
        }
    }))
}

pub fn service_account(name: &str, namespace: &str) -> ResourceDescriptor {
    ResourceDescriptor::new(json!({
        "apiVersion": "v1",
        "kind": "ServiceAccount",
        "automountServiceAccountToken": true,
        "metadata": {
            "name": name,
            "namespace": namespace
        }
    }))
}

/// Role granting read access to exactly one pre-existing secret
pub fn secret_reader_role(name: &str, namespace: &str, secret: &str) -> ResourceDescriptor {
    ResourceDescriptor::new(json!({
        "apiVersion": RBAC_API_VERSION,
        "kind": "Role",
        "metadata": {
            "name": name,
            "namespace": namespace
        },
        "rules": [{
            "apiGroups": [""],
            "resources": ["secrets"],
            "verbs": ["get", "watch", "list"],
            "resourceNames": [secret]
        }]
    }))
}

/// RoleBinding of the Role with the same name to a service account in `namespace`
pub fn role_binding(name: &str, namespace: &str, service_account: &str) -> ResourceDescriptor {
    ResourceDescriptor::new(json!({
        "apiVersion": RBAC_API_VERSION,
        "kind": "RoleBinding",
        "metadata": {
            "name": name,
            "namespace": namespace
        },
        "roleRef": {
            "apiGroup": RBAC_API_GROUP,
            "kind": "Role",
            "name": name
        },
        "subjects": [{
            "kind": "ServiceAccount",
            "name": service_account,
            "namespace": namespace
        }]
    }))
}

/// Values injected into the forwarder container environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwarderEnvironment<'a> {
    pub cluster_id: &'a str,
    pub poll_interval_minutes: u32,
    pub ocm_secret_name: &'a str,
    pub backend_type: &'a str,
    pub elasticsearch_url: &'a str,
    pub elasticsearch_auth_type: &'a str,
    pub elasticsearch_index: &'a str,
    pub elasticsearch_secret_name: &'a str,
    pub debug: bool,
}

impl ForwarderEnvironment<'_> {
    /// Env entries in [`FORWARDER_ENV_NAMES`] order.
    ///
    /// Numbers and booleans stay typed here and are coerced by the Deployment
    /// mutator.
    #[must_use]
    pub fn entries(&self) -> Value {
        json!([
            { "name": "OCM_CLUSTER_ID", "value": self.cluster_id },
            { "name": "OCM_POLL_INTERVAL_MINUTES", "value": self.poll_interval_minutes },
            { "name": "OCM_SECRET_NAME", "value": self.ocm_secret_name },
            pod_namespace_entry("OCM_SECRET_NAMESPACE"),
            { "name": "BACKEND_TYPE", "value": self.backend_type },
            { "name": "BACKEND_ES_URL", "value": self.elasticsearch_url },
            { "name": "BACKEND_ES_AUTH_TYPE", "value": self.elasticsearch_auth_type },
            { "name": "BACKEND_ES_INDEX", "value": self.elasticsearch_index },
            { "name": "BACKEND_ES_SECRET_NAME", "value": self.elasticsearch_secret_name },
            pod_namespace_entry("BACKEND_ES_SECRET_NAMESPACE"),
            { "name": "DEBUG", "value": self.debug }
        ])
    }
}

fn pod_namespace_entry(name: &str) -> Value {
    json!({
        "name": name,
        "valueFrom": {
            "fieldRef": {
                "fieldPath": POD_NAMESPACE_FIELD_PATH
            }
        }
    })
}

/// Inputs of the forwarder Deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTemplate<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
    pub service_account: &'a str,
    pub forwarder_version: &'a str,
    pub environment: ForwarderEnvironment<'a>,
}

pub fn deployment(template: &DeploymentTemplate<'_>) -> ResourceDescriptor {
    let name = template.name;
    let label = FORWARDER.name_label;

    ResourceDescriptor::new(json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": name,
            "namespace": template.namespace,
            "labels": { label: name }
        },
        "spec": {
            "replicas": 1,
            "selector": {
                "matchLabels": { label: name }
            },
            "template": {
                "metadata": {
                    "labels": { label: name }
                },
                "spec": {
                    "serviceAccountName": template.service_account,
                    "nodeSelector": {
                        "kubernetes.io/os": "linux"
                    },
                    "affinity": {
                        "podAntiAffinity": {
                            "preferredDuringSchedulingIgnoredDuringExecution": [{
                                "weight": 100,
                                "podAffinityTerm": {
                                    "topologyKey": "kubernetes.io/hostname",
                                    "labelSelector": {
                                        "matchExpressions": [{
                                            "key": label,
                                            "operator": "In",
                                            "values": [name]
                                        }]
                                    }
                                }
                            }]
                        }
                    },
                    "containers": [{
                        "name": FORWARDER.container_name,
                        "image": FORWARDER.image(template.forwarder_version),
                        "imagePullPolicy": "Always",
                        "env": template.environment.entries(),
                        "securityContext": {
                            "allowPrivilegeEscalation": false,
                            "readOnlyRootFilesystem": true,
                            "capabilities": {
                                "drop": ["ALL"]
                            },
                            "runAsNonRoot": true,
                            "runAsGroup": 0,
                            "seccompProfile": {
                                "type": "RuntimeDefault"
                            }
                        },
                        "resources": {
                            "requests": {
                                "cpu": "25m",
                                "memory": "32Mi"
                            },
                            "limits": {
                                "cpu": "50m",
                                "memory": "64Mi"
                            }
                        }
                    }]
                }
            }
        }
    }))
}
