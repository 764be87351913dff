//! Untyped nested-map form of a single cluster object.

use crate::error::ObjectIdentity;
use serde::Serialize;
use serde_json::{Map, Value};

/// A cluster object as a nested map of strings, numbers, booleans, lists and maps.
///
/// Builders always produce descriptors carrying `apiVersion`, `kind` and
/// `metadata.name`. Namespaced kinds carry `metadata.namespace` as well.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResourceDescriptor(Value);

impl ResourceDescriptor {
    #[must_use]
    pub fn new(object: Value) -> Self {
        Self(object)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    #[must_use]
    pub fn api_version(&self) -> &str {
        self.string_at(&["apiVersion"]).unwrap_or_default()
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        self.string_at(&["kind"]).unwrap_or_default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.string_at(&["metadata", "name"]).unwrap_or_default()
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.string_at(&["metadata", "namespace"])
    }

    #[must_use]
    pub fn identity(&self) -> ObjectIdentity {
        ObjectIdentity::new(
            self.namespace().unwrap_or_default(),
            self.name(),
            self.kind(),
        )
    }

    /// Value at a path of map keys, if every segment exists
    #[must_use]
    pub fn nested(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.0, |current, key| current.as_object()?.get(*key))
    }

    #[must_use]
    pub fn nested_slice(&self, path: &[&str]) -> Option<&[Value]> {
        self.nested(path)?.as_array().map(Vec::as_slice)
    }

    #[must_use]
    pub fn string_at(&self, path: &[&str]) -> Option<&str> {
        self.nested(path)?.as_str()
    }

    /// Replace the value at `path`, creating intermediate maps as needed.
    ///
    /// Returns `false` without modifying anything when an intermediate segment
    /// exists but is not a map.
    pub fn set_nested(&mut self, path: &[&str], value: Value) -> bool {
        let Some((last, parents)) = path.split_last() else {
            self.0 = value;
            return true;
        };

        let mut current = &mut self.0;
        for key in parents {
            let Some(map) = current.as_object_mut() else {
                return false;
            };
            current = map
                .entry((*key).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }

        match current.as_object_mut() {
            Some(map) => {
                map.insert((*last).to_string(), value);
                true
            }
            None => false,
        }
    }
}

impl From<Value> for ResourceDescriptor {
    fn from(object: Value) -> Self {
        Self::new(object)
    }
}
