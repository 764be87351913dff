//! # Collection Resources
//!
//! Child resources of an `OCMLogForwarderConfig`: the shared namespace, service
//! account and RBAC used by every forwarder in the collection.

use crate::constants::FORWARDER;
use crate::crd::OcmLogForwarderConfig;
use crate::error::GenerateError;
use crate::manifest::parse_manifest;
use crate::resources::{
    mutate, run_pipeline, templates, GeneratedResource, RequestContext, ResourceBuilder,
    ResourceDescriptor,
};
use crate::validation::validate_forwarder_config;
use tracing::info_span;

const PIPELINE: &str = "forwarder-config";

/// Builders for a collection, in output order
pub static BUILDERS: &[ResourceBuilder<OcmLogForwarderConfig>] = &[
    ResourceBuilder {
        name: "namespace",
        include: None,
        build: namespace,
        mutate: mutate::pass_through,
    },
    ResourceBuilder {
        name: "service-account",
        include: None,
        build: service_account,
        mutate: mutate::pass_through,
    },
    ResourceBuilder {
        name: "role-ocm",
        include: None,
        build: ocm_role,
        mutate: mutate::pass_through,
    },
    ResourceBuilder {
        name: "role-elastic",
        include: Some(backend_is_elasticsearch),
        build: elastic_role,
        mutate: mutate::pass_through,
    },
    ResourceBuilder {
        name: "role-binding-ocm",
        include: None,
        build: ocm_role_binding,
        mutate: mutate::pass_through,
    },
    ResourceBuilder {
        name: "role-binding-elastic",
        include: Some(backend_is_elasticsearch),
        build: elastic_role_binding,
        mutate: mutate::pass_through,
    },
];

fn backend_is_elasticsearch(collection: &OcmLogForwarderConfig) -> bool {
    collection.spec.backend.is_elasticsearch()
}

pub fn namespace(collection: &OcmLogForwarderConfig) -> ResourceDescriptor {
    templates::namespace(&collection.spec.forwarder_namespace)
}

pub fn service_account(collection: &OcmLogForwarderConfig) -> ResourceDescriptor {
    templates::service_account(
        collection.workload_name(),
        &collection.spec.forwarder_namespace,
    )
}

pub fn ocm_role(collection: &OcmLogForwarderConfig) -> ResourceDescriptor {
    templates::secret_reader_role(
        &FORWARDER.ocm_rbac_name(collection.workload_name()),
        &collection.spec.forwarder_namespace,
        FORWARDER.ocm_secret_name,
    )
}

pub fn elastic_role(collection: &OcmLogForwarderConfig) -> ResourceDescriptor {
    templates::secret_reader_role(
        &FORWARDER.elastic_rbac_name(collection.workload_name()),
        &collection.spec.forwarder_namespace,
        FORWARDER.elastic_secret_name,
    )
}

/// Bound to the collection's own service account, which is the one every
/// collection-scoped forwarder Deployment runs under.
pub fn ocm_role_binding(collection: &OcmLogForwarderConfig) -> ResourceDescriptor {
    let name = collection.workload_name();
    templates::role_binding(
        &FORWARDER.ocm_rbac_name(name),
        &collection.spec.forwarder_namespace,
        name,
    )
}

pub fn elastic_role_binding(collection: &OcmLogForwarderConfig) -> ResourceDescriptor {
    let name = collection.workload_name();
    templates::role_binding(
        &FORWARDER.elastic_rbac_name(name),
        &collection.spec.forwarder_namespace,
        name,
    )
}

/// Generate the child resources of a collection.
///
/// # Errors
///
/// Errors from mutators. Every collection resource uses the pass-through
/// mutator today, so this only fails if that changes.
pub fn generate(
    collection: &OcmLogForwarderConfig,
    context: Option<&RequestContext>,
) -> Result<Vec<GeneratedResource>, GenerateError> {
    let _span = info_span!(
        "generate_forwarder_config",
        collection = collection.workload_name(),
        namespace = %collection.spec.forwarder_namespace,
    )
    .entered();

    run_pipeline(PIPELINE, BUILDERS, collection, context)
}

/// Parse and validate a collection manifest, then generate without a request
/// context.
///
/// # Errors
///
/// `ConfigParse`, `ConversionMismatch` or `Validation` for a bad manifest.
pub fn generate_for_cli(collection_manifest: &str) -> Result<Vec<GeneratedResource>, GenerateError> {
    let collection: OcmLogForwarderConfig = parse_manifest(collection_manifest)?;
    validate_forwarder_config(&collection)?;
    generate(&collection, None)
}
