//! # Forwarder Resources
//!
//! Child resources of an `OCMLogForwarder`.
//!
//! A standalone forwarder carries its own service account and RBAC. A forwarder
//! that references a collection only gets its Deployment; the collection
//! provides everything else (see [`crate::forwarder_config`]).

pub mod deployment;
pub mod rbac;

pub use deployment::CollectionScoped;

use crate::crd::{OcmLogForwarder, OcmLogForwarderConfig};
use crate::error::GenerateError;
use crate::manifest::parse_manifest;
use crate::resources::{
    mutate, run_pipeline, GeneratedResource, RequestContext, ResourceBuilder,
};
use crate::validation::{validate_forwarder, validate_forwarder_config};
use tracing::info_span;

const PIPELINE: &str = "forwarder";

/// Builders for a forwarder without a collection, in output order
pub static STANDALONE_BUILDERS: &[ResourceBuilder<OcmLogForwarder>] = &[
    ResourceBuilder {
        name: "service-account",
        include: None,
        build: rbac::service_account,
        mutate: mutate::pass_through,
    },
    ResourceBuilder {
        name: "role-ocm",
        include: None,
        build: rbac::ocm_role,
        mutate: mutate::pass_through,
    },
    ResourceBuilder {
        name: "role-elastic",
        include: Some(deployment::standalone_backend_is_elasticsearch),
        build: rbac::elastic_role,
        mutate: mutate::pass_through,
    },
    ResourceBuilder {
        name: "role-binding-ocm",
        include: None,
        build: rbac::ocm_role_binding,
        mutate: mutate::pass_through,
    },
    ResourceBuilder {
        name: "role-binding-elastic",
        include: Some(deployment::standalone_backend_is_elasticsearch),
        build: rbac::elastic_role_binding,
        mutate: mutate::pass_through,
    },
    ResourceBuilder {
        name: "deployment",
        include: Some(deployment::standalone_backend_is_elasticsearch),
        build: deployment::standalone,
        mutate: mutate::deployment,
    },
];

/// Builders for a forwarder managed by a collection, in output order
#[must_use]
pub fn collection_scoped_builders<'a>() -> [ResourceBuilder<CollectionScoped<'a>>; 1] {
    [ResourceBuilder {
        name: "deployment",
        include: Some(deployment::collection_backend_is_elasticsearch),
        build: deployment::collection_scoped,
        mutate: mutate::deployment,
    }]
}

/// Generate the child resources of a forwarder.
///
/// With a collection the collection-scoped builders run, otherwise the
/// standalone ones. Inputs are trusted; see [`generate_for_cli`] for the
/// validating entry point.
///
/// # Errors
///
/// Structural or conversion errors from the Deployment mutator. Nothing is
/// returned on error.
pub fn generate(
    parent: &OcmLogForwarder,
    collection: Option<&OcmLogForwarderConfig>,
    context: Option<&RequestContext>,
) -> Result<Vec<GeneratedResource>, GenerateError> {
    let _span = info_span!(
        "generate_forwarder",
        workload = parent.workload_name(),
        namespace = parent.workload_namespace(),
        collection = collection.map(OcmLogForwarderConfig::workload_name),
    )
    .entered();

    match collection {
        Some(collection) => run_pipeline(
            PIPELINE,
            &collection_scoped_builders(),
            &CollectionScoped { parent, collection },
            context,
        ),
        None => run_pipeline(PIPELINE, STANDALONE_BUILDERS, parent, context),
    }
}

/// Parse and validate manifests, then generate without a request context.
///
/// # Errors
///
/// `ConfigParse`, `ConversionMismatch` or `Validation` for bad manifests, in
/// which case no builder runs.
pub fn generate_for_cli(
    workload_manifest: &str,
    collection_manifest: Option<&str>,
) -> Result<Vec<GeneratedResource>, GenerateError> {
    let parent: OcmLogForwarder = parse_manifest(workload_manifest)?;
    validate_forwarder(&parent)?;

    let collection = collection_manifest
        .map(|document| {
            let collection: OcmLogForwarderConfig = parse_manifest(document)?;
            validate_forwarder_config(&collection)?;
            Ok::<_, GenerateError>(collection)
        })
        .transpose()?;

    generate(&parent, collection.as_ref(), None)
}
