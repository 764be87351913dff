//! # CRD Validation Tests
//!
//! Tests for the CRD types, samples and generated CustomResourceDefinitions to
//! catch schema drift early.

mod common;

use common::*;
use kube::core::CustomResourceExt;
use ocm_log_forwarder::crd::{BackendType, ElasticSearchAuthType, Provider};
use ocm_log_forwarder::manifest::parse_manifest;
use ocm_log_forwarder::prelude::*;
use ocm_log_forwarder::samples;
use ocm_log_forwarder::validation::{validate_forwarder, validate_forwarder_config};
use serde_json::Value;

fn crd_schema<K: CustomResourceExt>() -> Value {
    let crd = serde_json::to_value(K::crd()).expect("Should serialize CRD");
    crd["spec"]["versions"][0]["schema"]["openAPIV3Schema"].clone()
}

#[test]
fn test_all_samples_parse_and_validate() {
    for required_only in [false, true] {
        let sample = samples::forwarder("latest", required_only).expect("Should have sample");
        let forwarder: OcmLogForwarder =
            parse_manifest(sample).expect("Forwarder sample should parse");
        validate_forwarder(&forwarder).expect("Forwarder sample should validate");

        let sample = samples::forwarder_config("latest", required_only).expect("Should have sample");
        let config: OcmLogForwarderConfig =
            parse_manifest(sample).expect("Config sample should parse");
        validate_forwarder_config(&config).expect("Config sample should validate");
    }
}

#[test]
fn test_full_forwarder_fields() {
    let forwarder = forwarder(FORWARDER_FULL);
    let spec = &forwarder.spec;

    assert_eq!(spec.forwarder_version, "v0.1.2");
    assert_eq!(spec.ocm.cluster_id, "22tgckqk9c2ff3jd8ve62p0i2st14vrq");
    assert_eq!(spec.ocm.poll_interval_minutes, 5);
    assert_eq!(spec.ocm.secret_ref, "my-ocm-token");
    assert_eq!(spec.backend.backend_type, BackendType::Elasticsearch);
    assert_eq!(spec.backend.elastic_search.url, "https://es.example.com:9200");
    assert_eq!(spec.backend.elastic_search.auth_type, ElasticSearchAuthType::Basic);
    assert_eq!(spec.backend.elastic_search.secret_name(), "my-es-auth");
    assert!(!spec.debug);
}

#[test]
fn test_collection_reference() {
    let document = FORWARDER_REQUIRED_ONLY.replace(
        "spec:\n",
        "spec:\n  collection:\n    name: collection\n",
    );
    let forwarder = forwarder(&document);
    let reference = forwarder.spec.collection.as_ref().expect("Should have collection");
    assert_eq!(reference.name, "collection");
    assert_eq!(reference.namespace, None);
    assert!(forwarder.spec.is_collection_scoped());
}

#[test]
fn test_collection_fields() {
    let collection = collection(COLLECTION);
    assert_eq!(collection.spec.provider, Provider::Rosa);
    assert_eq!(collection.spec.forwarder_namespace, "ocm-log-forwarder");
    assert_eq!(collection.spec.backend.elastic_search.index, "collection_logs");
}

#[test]
fn test_forwarder_crd_metadata() {
    let crd = OcmLogForwarder::crd();
    assert_eq!(crd.spec.group, "apps.dustinscott.io");
    assert_eq!(crd.spec.names.kind, "OCMLogForwarder");
    assert_eq!(crd.spec.scope, "Namespaced");
    assert_eq!(crd.spec.versions[0].name, "v1alpha1");
}

#[test]
fn test_forwarder_config_crd_is_cluster_scoped() {
    let crd = OcmLogForwarderConfig::crd();
    assert_eq!(crd.spec.names.kind, "OCMLogForwarderConfig");
    assert_eq!(crd.spec.scope, "Cluster");
}

#[test]
fn test_forwarder_schema_constraints() {
    let schema = crd_schema::<OcmLogForwarder>();
    let spec = &schema["properties"]["spec"];

    let poll = &spec["properties"]["ocm"]["properties"]["pollInternalMinutes"];
    assert_eq!(poll["minimum"].as_f64(), Some(1.0));
    assert_eq!(poll["maximum"].as_f64(), Some(1440.0));

    let elastic_search = &spec["properties"]["backend"]["properties"]["elasticSearch"];
    assert_eq!(
        elastic_search["properties"]["index"]["maxLength"].as_u64(),
        Some(128)
    );
    assert_eq!(
        spec["properties"]["backend"]["properties"]["type"]["enum"],
        serde_json::json!(["elasticsearch"])
    );

    let required = spec["required"].as_array().expect("spec should list required fields");
    assert!(required.contains(&Value::from("ocm")));
}
