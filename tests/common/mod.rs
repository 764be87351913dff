//! Common test utilities for the generation tests
//!
//! Manifest fixtures and helpers for digging into generated resources.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use ocm_log_forwarder::prelude::*;
use serde_json::Value;

pub const FORWARDER_FULL: &str = r#"
apiVersion: apps.dustinscott.io/v1alpha1
kind: OCMLogForwarder
metadata:
  name: sample
  namespace: logging
spec:
  forwarderVersion: "v0.1.2"
  ocm:
    clusterId: "22tgckqk9c2ff3jd8ve62p0i2st14vrq"
    pollInternalMinutes: 5
    secretRef: "my-ocm-token"
  backend:
    type: "elasticsearch"
    elasticSearch:
      url: "https://es.example.com:9200"
      authType: "basic"
      index: "service_logs"
      secretRef: "my-es-auth"
  debug: false
"#;

pub const FORWARDER_REQUIRED_ONLY: &str = r#"
apiVersion: apps.dustinscott.io/v1alpha1
kind: OCMLogForwarder
metadata:
  name: sample
  namespace: default
spec:
  ocm:
    clusterId: "22tgckqk9c2ff3jd8ve62p0i2st14vrq"
"#;

pub const FORWARDER_UNSUPPORTED_BACKEND: &str = r#"
apiVersion: apps.dustinscott.io/v1alpha1
kind: OCMLogForwarder
metadata:
  name: sample
  namespace: default
spec:
  ocm:
    clusterId: "22tgckqk9c2ff3jd8ve62p0i2st14vrq"
  backend:
    type: "splunk"
"#;

pub const COLLECTION: &str = r#"
apiVersion: apps.dustinscott.io/v1alpha1
kind: OCMLogForwarderConfig
metadata:
  name: collection
spec:
  provider: "rosa"
  forwarderNamespace: "ocm-log-forwarder"
  backend:
    type: "elasticsearch"
    elasticSearch:
      url: "https://collection-es.example.com:9200"
      authType: "basic"
      index: "collection_logs"
"#;

pub fn forwarder(document: &str) -> OcmLogForwarder {
    serde_yaml::from_str(document).expect("Should parse OCMLogForwarder fixture")
}

pub fn collection(document: &str) -> OcmLogForwarderConfig {
    serde_yaml::from_str(document).expect("Should parse OCMLogForwarderConfig fixture")
}

/// A forwarder whose backend is not ElasticSearch.
///
/// Validation rejects such manifests, but the generators still have to
/// tolerate them when called directly.
pub fn forwarder_without_elasticsearch() -> OcmLogForwarder {
    forwarder(FORWARDER_UNSUPPORTED_BACKEND)
}

pub fn collection_without_elasticsearch() -> OcmLogForwarderConfig {
    let mut collection = collection(COLLECTION);
    collection.spec.backend.backend_type = "splunk".into();
    collection
}

/// `(kind, name)` of every resource, in output order
pub fn kinds_and_names(resources: &[GeneratedResource]) -> Vec<(String, String)> {
    resources
        .iter()
        .map(|resource| (resource.kind(), resource.name()))
        .collect()
}

pub fn to_value(resource: &GeneratedResource) -> Value {
    serde_json::to_value(resource).expect("Should serialize resource")
}

/// Env entries of the first container of a Deployment resource
pub fn container_env(resource: &GeneratedResource) -> Vec<Value> {
    to_value(resource)
        .pointer("/spec/template/spec/containers/0/env")
        .and_then(Value::as_array)
        .cloned()
        .expect("Deployment should carry a container env list")
}

pub fn env_names(resource: &GeneratedResource) -> Vec<String> {
    container_env(resource)
        .iter()
        .filter_map(|entry| entry["name"].as_str().map(str::to_string))
        .collect()
}

pub fn env_value(resource: &GeneratedResource, name: &str) -> Value {
    container_env(resource)
        .into_iter()
        .find(|entry| entry["name"] == name)
        .map(|entry| entry["value"].clone())
        .unwrap_or(Value::Null)
}
