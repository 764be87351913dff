//! Mutators run on every built descriptor before it is returned.
//!
//! Without a request context they return the descriptor unchanged, which is what
//! offline generation relies on to print manifests exactly as built.

use crate::error::{GenerateError, ObjectIdentity};
use crate::observability::metrics;
use crate::resources::coerce::coerce_entry;
use crate::resources::{GeneratedResource, RequestContext, ResourceDescriptor, TypedResource};
use k8s_openapi::api::apps::v1::Deployment;
use serde_json::Value;
use tracing::{debug, warn};

/// Path of the container list inside a Deployment
pub const CONTAINERS_PATH: &[&str] = &["spec", "template", "spec", "containers"];

/// Mutator for kinds that need no post-processing
pub fn pass_through(
    descriptor: ResourceDescriptor,
    _context: Option<&RequestContext>,
) -> Result<GeneratedResource, GenerateError> {
    Ok(GeneratedResource::Unstructured(descriptor))
}

/// Coerce every container env value to a string and convert to a typed Deployment.
///
/// # Errors
///
/// - `Structural` when the container list or a container's `env` is missing
/// - `Conversion` when the result does not fit the Deployment schema
pub fn deployment(
    descriptor: ResourceDescriptor,
    context: Option<&RequestContext>,
) -> Result<GeneratedResource, GenerateError> {
    let Some(context) = context else {
        return Ok(GeneratedResource::Unstructured(descriptor));
    };

    let object = descriptor.identity();
    debug!(request = %context, object = %object, "Mutating deployment");

    let result = coerce_containers(&descriptor, &object).and_then(|containers| {
        let mut mutated = descriptor;
        mutated.set_nested(CONTAINERS_PATH, Value::Array(containers));
        into_deployment(mutated, object.clone())
    });

    if let Err(e) = &result {
        metrics::increment_mutation_failures();
        warn!(request = %context, object = %object, error = %e, "Failed to mutate deployment");
    }
    result
}

fn coerce_containers(
    descriptor: &ResourceDescriptor,
    object: &ObjectIdentity,
) -> Result<Vec<Value>, GenerateError> {
    let containers = descriptor
        .nested_slice(CONTAINERS_PATH)
        .ok_or_else(|| GenerateError::missing_container_specification(object.clone()))?;

    containers
        .iter()
        .map(|container| coerce_container(container, object))
        .collect()
}

fn coerce_container(container: &Value, object: &ObjectIdentity) -> Result<Value, GenerateError> {
    let Value::Object(container) = container else {
        return Err(GenerateError::missing_container_specification(object.clone()));
    };
    let name = container
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let Some(Value::Array(environment)) = container.get("env") else {
        return Err(GenerateError::missing_environment(name, object.clone()));
    };

    let environment = environment
        .iter()
        .map(|entry| match entry {
            Value::Object(entry) => Ok(Value::Object(coerce_entry(entry))),
            _ => Err(GenerateError::missing_environment(name, object.clone())),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut container = container.clone();
    container.insert("env".to_string(), Value::Array(environment));
    Ok(Value::Object(container))
}

fn into_deployment(
    descriptor: ResourceDescriptor,
    object: ObjectIdentity,
) -> Result<GeneratedResource, GenerateError> {
    let deployment: Deployment =
        serde_json::from_value(descriptor.into_value()).map_err(|source| {
            GenerateError::Conversion {
                target: "Deployment".to_string(),
                object,
                source,
            }
        })?;
    Ok(GeneratedResource::Typed(TypedResource::Deployment(
        Box::new(deployment),
    )))
}
