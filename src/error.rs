//! # Errors
//!
//! Error type returned by every generation entry point.

use std::fmt;
use thiserror::Error;

/// Identity of an object under mutation or conversion.
///
/// Rendered as `[namespace/name] of kind [Kind]` so that failures can be traced
/// back to the exact child resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectIdentity {
    pub namespace: String,
    pub name: String,
    pub kind: String,
}

impl ObjectIdentity {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for ObjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] of kind [{}]", self.namespace, self.name, self.kind)
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    /// A serialized manifest could not be parsed
    #[error("failed to unmarshal yaml into {kind}: {source}")]
    ConfigParse {
        kind: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A parsed manifest violates a schema constraint
    #[error("error validating {kind} yaml: {field} {message}")]
    Validation {
        kind: String,
        field: String,
        message: String,
    },

    /// An expected nested path is missing from a resource under mutation
    #[error("unable to find {what} for object {object}")]
    Structural { what: String, object: ObjectIdentity },

    /// A mutated resource does not fit its typed schema
    #[error("unable to convert object {object} to {target}: {source}")]
    Conversion {
        target: String,
        object: ObjectIdentity,
        #[source]
        source: serde_json::Error,
    },

    /// A config object of the wrong kind was handed to a kind-specific converter
    #[error("unable to convert to {expected}: got {found}")]
    ConversionMismatch { expected: String, found: String },
}

impl GenerateError {
    pub(crate) fn validation(
        kind: &str,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Validation {
            kind: kind.to_string(),
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn missing_container_specification(object: ObjectIdentity) -> Self {
        Self::Structural {
            what: "container specification".to_string(),
            object,
        }
    }

    pub(crate) fn missing_environment(container: &str, object: ObjectIdentity) -> Self {
        Self::Structural {
            what: format!("environment from container {container}"),
            object,
        }
    }

    /// Whether the failure came from the input manifests rather than the generators
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigParse { .. } | Self::Validation { .. } | Self::ConversionMismatch { .. }
        )
    }
}
