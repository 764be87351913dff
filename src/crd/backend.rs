//! # Backend Configuration
//!
//! Where a forwarder ships service logs. Only ElasticSearch exists today, but the
//! type is kept open so that manifests naming a backend this build does not know
//! about parse cleanly and are rejected by validation instead of by serde.

use crate::constants::{
    BACKEND_TYPE_ELASTICSEARCH, DEFAULT_ELASTICSEARCH_INDEX, DEFAULT_ELASTICSEARCH_URL, FORWARDER,
};
use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BackendSpec {
    /// Backend type
    #[serde(rename = "type", default)]
    pub backend_type: BackendType,
    /// ElasticSearch settings, only read when `type` is `elasticsearch`
    #[serde(default)]
    pub elastic_search: ElasticSearchSpec,
}

impl Default for BackendSpec {
    fn default() -> Self {
        Self {
            backend_type: BackendType::Elasticsearch,
            elastic_search: ElasticSearchSpec::default(),
        }
    }
}

impl BackendSpec {
    #[must_use]
    pub fn is_elasticsearch(&self) -> bool {
        self.backend_type.is_elasticsearch()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendType {
    #[default]
    Elasticsearch,
    /// Any value not served by this version, kept verbatim for error reporting
    Unsupported(String),
}

impl BackendType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Elasticsearch => BACKEND_TYPE_ELASTICSEARCH,
            Self::Unsupported(value) => value,
        }
    }

    #[must_use]
    pub fn is_elasticsearch(&self) -> bool {
        matches!(self, Self::Elasticsearch)
    }
}

impl From<&str> for BackendType {
    fn from(value: &str) -> Self {
        if value == BACKEND_TYPE_ELASTICSEARCH {
            Self::Elasticsearch
        } else {
            Self::Unsupported(value.to_string())
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BackendType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BackendType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

impl JsonSchema for BackendType {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("BackendType")
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "enum": [BACKEND_TYPE_ELASTICSEARCH],
            "description": "Backend receiving the forwarded service logs."
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElasticSearchSpec {
    /// ElasticSearch endpoint, including scheme and port
    #[serde(default = "default_elasticsearch_url")]
    pub url: String,
    #[serde(default)]
    pub auth_type: ElasticSearchAuthType,
    /// Index receiving the service logs
    #[serde(default = "default_elasticsearch_index")]
    #[schemars(length(max = 128))]
    pub index: String,
    /// Secret holding the ElasticSearch credentials. Defaults to `elastic-auth`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<String>,
}

impl Default for ElasticSearchSpec {
    fn default() -> Self {
        Self {
            url: default_elasticsearch_url(),
            auth_type: ElasticSearchAuthType::default(),
            index: default_elasticsearch_index(),
            secret_ref: None,
        }
    }
}

impl ElasticSearchSpec {
    /// Name of the credentials secret, falling back to the well-known name
    #[must_use]
    pub fn secret_name(&self) -> &str {
        self.secret_ref
            .as_deref()
            .unwrap_or(FORWARDER.elastic_secret_name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ElasticSearchAuthType {
    /// Username and password read from the credentials secret
    #[default]
    Basic,
}

impl ElasticSearchAuthType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
        }
    }
}

fn default_elasticsearch_url() -> String {
    DEFAULT_ELASTICSEARCH_URL.to_string()
}

fn default_elasticsearch_index() -> String {
    DEFAULT_ELASTICSEARCH_INDEX.to_string()
}
