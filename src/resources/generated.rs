//! Output of the generation pipelines.

use crate::error::ObjectIdentity;
use crate::resources::ResourceDescriptor;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::Resource as _;
use kube::ResourceExt;
use serde::Serialize;

/// Canonical typed form of a mutated resource
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedResource {
    Deployment(Box<Deployment>),
}

impl TypedResource {
    #[must_use]
    pub fn identity(&self) -> ObjectIdentity {
        match self {
            Self::Deployment(deployment) => ObjectIdentity::new(
                deployment.namespace().unwrap_or_default(),
                deployment.name_any(),
                Deployment::KIND,
            ),
        }
    }
}

/// One entry of a generated resource list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedResource {
    /// Converted by a mutator running with a request context
    Typed(TypedResource),
    /// Returned as built, either by a pass-through mutator or without context
    Unstructured(ResourceDescriptor),
}

impl GeneratedResource {
    #[must_use]
    pub fn identity(&self) -> ObjectIdentity {
        match self {
            Self::Typed(typed) => typed.identity(),
            Self::Unstructured(descriptor) => descriptor.identity(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> String {
        self.identity().kind
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.identity().name
    }

    #[must_use]
    pub fn as_deployment(&self) -> Option<&Deployment> {
        match self {
            Self::Typed(TypedResource::Deployment(deployment)) => Some(&**deployment),
            Self::Unstructured(_) => None,
        }
    }

    #[must_use]
    pub fn as_descriptor(&self) -> Option<&ResourceDescriptor> {
        match self {
            Self::Unstructured(descriptor) => Some(descriptor),
            Self::Typed(_) => None,
        }
    }
}

/// Render resources as a YAML stream, each document preceded by `---`.
pub fn to_yaml_stream(resources: &[GeneratedResource]) -> Result<String, serde_yaml::Error> {
    let mut stream = String::new();
    for resource in resources {
        stream.push_str("---\n");
        stream.push_str(&serde_yaml::to_string(resource)?);
    }
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_stream_separates_documents() {
        let resources = vec![
            GeneratedResource::Unstructured(ResourceDescriptor::new(json!({
                "apiVersion": "v1",
                "kind": "Namespace",
                "metadata": { "name": "first" }
            }))),
            GeneratedResource::Unstructured(ResourceDescriptor::new(json!({
                "apiVersion": "v1",
                "kind": "Namespace",
                "metadata": { "name": "second" }
            }))),
        ];

        let stream = to_yaml_stream(&resources).expect("Should render stream");
        assert_eq!(stream.matches("---\n").count(), 2);
        assert!(stream.starts_with("---\n"));
        assert!(stream.contains("name: first"));
        assert!(stream.contains("name: second"));
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(to_yaml_stream(&[]).expect("Should render"), "");
    }
}
