//! # Validation
//!
//! Constraint checks applied to parsed manifests before any builder runs.
//!
//! Builders trust their inputs, so everything a template interpolates into a
//! name, label or reference is checked here.

mod kubernetes;

pub use kubernetes::{
    validate_image_tag, validate_kubernetes_label, validate_kubernetes_name,
    validate_kubernetes_namespace,
};

use crate::constants::{
    MAX_ELASTICSEARCH_INDEX_LENGTH, MAX_POLL_INTERVAL_MINUTES, MIN_POLL_INTERVAL_MINUTES,
};
use crate::crd::{BackendSpec, BackendType, OcmLogForwarder, OcmLogForwarderConfig};
use crate::error::GenerateError;
use kube::Resource;
use tracing::debug;

/// Validate an OCMLogForwarder manifest.
///
/// # Errors
///
/// Returns `GenerateError::Validation` naming the first offending field.
pub fn validate_forwarder(forwarder: &OcmLogForwarder) -> Result<(), GenerateError> {
    let kind = OcmLogForwarder::kind(&());
    let check = |field: &str, result: Result<(), String>| {
        result.map_err(|message| GenerateError::validation(&kind, field, message))
    };

    // Used as a label value and as the name of every generated object
    let name = forwarder.metadata.name.as_deref().unwrap_or_default();
    check("metadata.name", validate_kubernetes_label(name))?;
    check("metadata.name", validate_kubernetes_name(name))?;
    if let Some(namespace) = forwarder.metadata.namespace.as_deref() {
        check("metadata.namespace", validate_kubernetes_namespace(namespace))?;
    }

    let spec = &forwarder.spec;
    if let Some(collection) = &spec.collection {
        check("spec.collection.name", validate_kubernetes_name(&collection.name))?;
    }
    check(
        "spec.forwarderVersion",
        validate_image_tag(&spec.forwarder_version),
    )?;

    if spec.ocm.cluster_id.trim().is_empty() {
        return Err(GenerateError::validation(
            &kind,
            "spec.ocm.clusterId",
            "cannot be empty",
        ));
    }
    check(
        "spec.ocm.pollInternalMinutes",
        validate_poll_interval(spec.ocm.poll_interval_minutes),
    )?;
    check("spec.ocm.secretRef", validate_kubernetes_name(&spec.ocm.secret_ref))?;

    validate_backend(&kind, &spec.backend)?;

    debug!(workload = forwarder.workload_name(), "Validated {kind}");
    Ok(())
}

/// Validate an OCMLogForwarderConfig manifest.
///
/// # Errors
///
/// Returns `GenerateError::Validation` naming the first offending field.
pub fn validate_forwarder_config(config: &OcmLogForwarderConfig) -> Result<(), GenerateError> {
    let kind = OcmLogForwarderConfig::kind(&());
    let check = |field: &str, result: Result<(), String>| {
        result.map_err(|message| GenerateError::validation(&kind, field, message))
    };

    check(
        "metadata.name",
        validate_kubernetes_name(config.metadata.name.as_deref().unwrap_or_default()),
    )?;
    check(
        "spec.forwarderNamespace",
        validate_kubernetes_namespace(&config.spec.forwarder_namespace),
    )?;

    validate_backend(&kind, &config.spec.backend)?;

    debug!(collection = config.workload_name(), "Validated {kind}");
    Ok(())
}

fn validate_poll_interval(minutes: u32) -> Result<(), String> {
    if (MIN_POLL_INTERVAL_MINUTES..=MAX_POLL_INTERVAL_MINUTES).contains(&minutes) {
        Ok(())
    } else {
        Err(format!(
            "must be between {MIN_POLL_INTERVAL_MINUTES} and {MAX_POLL_INTERVAL_MINUTES} (got {minutes})"
        ))
    }
}

fn validate_backend(kind: &str, backend: &BackendSpec) -> Result<(), GenerateError> {
    if let BackendType::Unsupported(value) = &backend.backend_type {
        return Err(GenerateError::validation(
            kind,
            "spec.backend.type",
            format!("'{value}' is not a supported backend (supported: elasticsearch)"),
        ));
    }

    let elastic_search = &backend.elastic_search;
    if elastic_search.url.trim().is_empty() {
        return Err(GenerateError::validation(
            kind,
            "spec.backend.elasticSearch.url",
            "cannot be empty",
        ));
    }

    let index = &elastic_search.index;
    if index.is_empty() {
        return Err(GenerateError::validation(
            kind,
            "spec.backend.elasticSearch.index",
            "cannot be empty",
        ));
    }
    if index.chars().count() > MAX_ELASTICSEARCH_INDEX_LENGTH {
        return Err(GenerateError::validation(
            kind,
            "spec.backend.elasticSearch.index",
            format!(
                "exceeds maximum length of {MAX_ELASTICSEARCH_INDEX_LENGTH} characters (got {})",
                index.chars().count()
            ),
        ));
    }

    if let Some(secret_ref) = &elastic_search.secret_ref {
        validate_kubernetes_name(secret_ref).map_err(|message| {
            GenerateError::validation(kind, "spec.backend.elasticSearch.secretRef", message)
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forwarder(spec: &str) -> OcmLogForwarder {
        let yaml = format!(
            "apiVersion: apps.dustinscott.io/v1alpha1\nkind: OCMLogForwarder\nmetadata:\n  name: sample\n  namespace: default\nspec:\n{spec}"
        );
        serde_yaml::from_str(&yaml).expect("Should parse forwarder")
    }

    fn field_of(err: GenerateError) -> String {
        match err {
            GenerateError::Validation { field, .. } => field,
            other => panic!("Expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_required_only_forwarder_is_valid() {
        assert!(validate_forwarder(&forwarder("  ocm:\n    clusterId: abc123\n")).is_ok());
    }

    #[test]
    fn test_poll_interval_bounds() {
        for minutes in [1, 5, 1440] {
            let spec = format!("  ocm:\n    clusterId: abc123\n    pollInternalMinutes: {minutes}\n");
            assert!(validate_forwarder(&forwarder(&spec)).is_ok(), "{minutes} should be valid");
        }
        for minutes in [0, 1441] {
            let spec = format!("  ocm:\n    clusterId: abc123\n    pollInternalMinutes: {minutes}\n");
            let err = validate_forwarder(&forwarder(&spec)).expect_err("Should fail");
            assert_eq!(field_of(err), "spec.ocm.pollInternalMinutes");
        }
    }

    #[test]
    fn test_empty_cluster_id_rejected() {
        let err = validate_forwarder(&forwarder("  ocm:\n    clusterId: \"\"\n"))
            .expect_err("Should fail");
        assert_eq!(field_of(err), "spec.ocm.clusterId");
    }

    #[test]
    fn test_index_length_limit() {
        let ok = format!(
            "  ocm:\n    clusterId: abc123\n  backend:\n    elasticSearch:\n      index: {}\n",
            "i".repeat(128)
        );
        assert!(validate_forwarder(&forwarder(&ok)).is_ok());

        let too_long = format!(
            "  ocm:\n    clusterId: abc123\n  backend:\n    elasticSearch:\n      index: {}\n",
            "i".repeat(129)
        );
        let err = validate_forwarder(&forwarder(&too_long)).expect_err("Should fail");
        assert_eq!(field_of(err), "spec.backend.elasticSearch.index");
    }

    #[test]
    fn test_unsupported_backend_rejected() {
        let spec = "  ocm:\n    clusterId: abc123\n  backend:\n    type: splunk\n";
        let err = validate_forwarder(&forwarder(spec)).expect_err("Should fail");
        assert!(err.to_string().contains("'splunk' is not a supported backend"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        let spec = "  forwarderVersion: \"-bad\"\n  ocm:\n    clusterId: abc123\n";
        let err = validate_forwarder(&forwarder(spec)).expect_err("Should fail");
        assert_eq!(field_of(err), "spec.forwarderVersion");

        let spec = "  ocm:\n    clusterId: abc123\n    secretRef: Bad_Secret\n";
        let err = validate_forwarder(&forwarder(spec)).expect_err("Should fail");
        assert_eq!(field_of(err), "spec.ocm.secretRef");
    }

    #[test]
    fn test_forwarder_name_must_be_valid_object_name() {
        let mut invalid = forwarder("  ocm:\n    clusterId: abc123\n");
        invalid.metadata.name = Some("my_fwd".to_string());
        let err = validate_forwarder(&invalid).expect_err("Should reject underscore");
        assert_eq!(field_of(err), "metadata.name");

        invalid.metadata.name = Some("a".repeat(64));
        let err = validate_forwarder(&invalid).expect_err("Should reject long label value");
        assert_eq!(field_of(err), "metadata.name");

        invalid.metadata.name = Some("my-fwd".to_string());
        assert!(validate_forwarder(&invalid).is_ok());
    }

    #[test]
    fn test_forwarder_config_namespace_rejected() {
        let config: OcmLogForwarderConfig = serde_yaml::from_str(
            "apiVersion: apps.dustinscott.io/v1alpha1\nkind: OCMLogForwarderConfig\nmetadata:\n  name: collection\nspec:\n  forwarderNamespace: Not_Valid\n",
        )
        .expect("Should parse config");
        let err = validate_forwarder_config(&config).expect_err("Should fail");
        assert_eq!(field_of(err), "spec.forwarderNamespace");
    }
}
