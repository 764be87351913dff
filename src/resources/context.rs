use kube::{Resource, ResourceExt};
use std::fmt;

/// Handle to the live request that triggered generation.
///
/// Supplied by the reconciling control plane and absent for offline generation
/// (the CLI). Its presence is what switches mutators from pass-through to
/// coercion and typed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    name: String,
    namespace: Option<String>,
}

impl RequestContext {
    pub fn new(name: impl Into<String>, namespace: Option<String>) -> Self {
        Self {
            name: name.into(),
            namespace,
        }
    }

    /// Context for a request reconciling `object`
    pub fn for_resource<K: Resource>(object: &K) -> Self {
        Self::new(object.name_any(), object.namespace())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{namespace}/{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}
