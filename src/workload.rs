//! # Workload Conversion
//!
//! The reconciling control plane hands over untyped API objects. These helpers
//! convert them to the typed config kinds before generation.

use crate::crd::{OcmLogForwarder, OcmLogForwarderConfig};
use crate::error::{GenerateError, ObjectIdentity};
use kube::core::DynamicObject;
use kube::{Resource, ResourceExt};
use serde::de::DeserializeOwned;

/// Convert an untyped object into a typed custom resource.
///
/// # Errors
///
/// - `ConversionMismatch` when the object is of another kind
/// - `Conversion` when the object does not fit the typed schema
pub fn from_dynamic<K>(object: &DynamicObject) -> Result<K, GenerateError>
where
    K: Resource<DynamicType = ()> + DeserializeOwned,
{
    let expected = K::kind(&());
    let found = object
        .types
        .as_ref()
        .map(|types| types.kind.as_str())
        .unwrap_or_default();
    if found != expected {
        return Err(GenerateError::ConversionMismatch {
            expected: expected.into_owned(),
            found: found.to_string(),
        });
    }

    let identity = ObjectIdentity::new(
        object.namespace().unwrap_or_default(),
        object.name_any(),
        found,
    );
    serde_json::to_value(object)
        .and_then(serde_json::from_value)
        .map_err(|source| GenerateError::Conversion {
            target: expected.into_owned(),
            object: identity,
            source,
        })
}

/// Convert the workload and optional collection handed over for a forwarder
pub fn forwarder_inputs(
    workload: &DynamicObject,
    collection: Option<&DynamicObject>,
) -> Result<(OcmLogForwarder, Option<OcmLogForwarderConfig>), GenerateError> {
    let forwarder = from_dynamic(workload)?;
    let collection = collection.map(from_dynamic).transpose()?;
    Ok((forwarder, collection))
}
