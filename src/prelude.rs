//! Common imports for code embedding the generators.

pub use crate::crd::{OcmLogForwarder, OcmLogForwarderConfig};
pub use crate::error::{GenerateError, ObjectIdentity};
pub use crate::resources::{GeneratedResource, RequestContext, TypedResource};
pub use crate::{forwarder, forwarder_config};
