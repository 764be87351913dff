//! # Manifests
//!
//! Parsing of serialized custom resource manifests.
//!
//! The `apiVersion`/`kind` envelope is checked before the body, so a manifest of
//! the wrong kind is reported as such rather than as a missing field.

use crate::error::GenerateError;
use kube::core::TypeMeta;
use kube::Resource;
use serde::de::DeserializeOwned;

/// Parse a YAML manifest into a typed custom resource.
///
/// # Errors
///
/// - `ConfigParse` when the document is not valid YAML for the kind
/// - `ConversionMismatch` when the envelope names a different kind or version
pub fn parse_manifest<K>(document: &str) -> Result<K, GenerateError>
where
    K: Resource<DynamicType = ()> + DeserializeOwned,
{
    let kind = K::kind(&()).into_owned();
    let type_meta = type_meta(document, &kind)?;

    let expected_api_version = K::api_version(&());
    if type_meta.kind != kind || type_meta.api_version != expected_api_version {
        return Err(GenerateError::ConversionMismatch {
            expected: format!("{expected_api_version}/{kind}"),
            found: format!("{}/{}", type_meta.api_version, type_meta.kind),
        });
    }

    serde_yaml::from_str(document).map_err(|source| GenerateError::ConfigParse { kind, source })
}

/// Version part of a manifest's `apiVersion`, e.g. `v1alpha1`
///
/// # Errors
///
/// `ConfigParse` when the envelope cannot be read.
pub fn manifest_api_version(document: &str) -> Result<String, GenerateError> {
    let type_meta = type_meta(document, "manifest")?;
    let version = type_meta
        .api_version
        .rsplit_once('/')
        .map_or(type_meta.api_version.as_str(), |(_, version)| version);
    Ok(version.to_string())
}

fn type_meta(document: &str, kind: &str) -> Result<TypeMeta, GenerateError> {
    serde_yaml::from_str(document).map_err(|source| GenerateError::ConfigParse {
        kind: kind.to_string(),
        source,
    })
}
