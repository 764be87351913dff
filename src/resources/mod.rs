//! # Resources
//!
//! The generation pipeline shared by every workload kind.
//!
//! ## Flow
//!
//! 1. Inclusion filter: an optional predicate per builder
//! 2. Builder: produces one [`ResourceDescriptor`]
//! 3. Mutator: pass-through, or coercion plus typed conversion when a
//!    [`RequestContext`] is present
//! 4. [`run_builders`]: runs a table in order, stopping on the first error
//!
//! `templates` holds the descriptor builders shared by the forwarder and
//! collection pipelines.

pub mod coerce;
mod context;
mod descriptor;
mod generated;
pub mod mutate;
mod pipeline;
pub mod templates;

pub use context::RequestContext;
pub use descriptor::ResourceDescriptor;
pub use generated::{to_yaml_stream, GeneratedResource, TypedResource};
pub use pipeline::{run_builders, run_pipeline, BuildFn, IncludeFn, MutateFn, ResourceBuilder};
