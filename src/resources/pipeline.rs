//! Ordered builder tables and the loop that runs them.

use crate::error::GenerateError;
use crate::observability::metrics;
use crate::resources::{GeneratedResource, RequestContext, ResourceDescriptor};
use std::fmt;
use std::time::Instant;
use tracing::{debug, error, info};

/// Decides whether a builder's resource exists for the given inputs
pub type IncludeFn<I> = fn(&I) -> bool;

/// Builds the untyped form of exactly one resource
pub type BuildFn<I> = fn(&I) -> ResourceDescriptor;

/// Post-processes a built resource, see [`crate::resources::mutate`]
pub type MutateFn =
    fn(ResourceDescriptor, Option<&RequestContext>) -> Result<GeneratedResource, GenerateError>;

/// One entry of a builder table.
///
/// Tables are plain slices; the order of entries is the order of the output.
pub struct ResourceBuilder<I> {
    /// Short name used in logs
    pub name: &'static str,
    /// `None` means the resource is always included
    pub include: Option<IncludeFn<I>>,
    pub build: BuildFn<I>,
    pub mutate: MutateFn,
}

impl<I> fmt::Debug for ResourceBuilder<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceBuilder")
            .field("name", &self.name)
            .field("guarded", &self.include.is_some())
            .finish_non_exhaustive()
    }
}

impl<I> ResourceBuilder<I> {
    #[must_use]
    pub fn includes(&self, input: &I) -> bool {
        self.include.is_none_or(|include| include(input))
    }

    /// Run the inclusion filter, the builder and the mutator.
    ///
    /// Returns an empty list when the filter excludes the resource.
    pub fn create(
        &self,
        input: &I,
        context: Option<&RequestContext>,
    ) -> Result<Vec<GeneratedResource>, GenerateError> {
        if !self.includes(input) {
            debug!(builder = self.name, "Skipping resource excluded by inclusion filter");
            return Ok(Vec::new());
        }

        let descriptor = (self.build)(input);
        debug!(
            builder = self.name,
            kind = descriptor.kind(),
            name = descriptor.name(),
            namespace = descriptor.namespace().unwrap_or_default(),
            "Built resource"
        );

        (self.mutate)(descriptor, context).map(|resource| vec![resource])
    }
}

/// Run every builder in table order and concatenate the results.
///
/// The first error aborts the run and no partial list is returned.
pub fn run_builders<I>(
    builders: &[ResourceBuilder<I>],
    input: &I,
    context: Option<&RequestContext>,
) -> Result<Vec<GeneratedResource>, GenerateError> {
    let mut resources = Vec::with_capacity(builders.len());
    for builder in builders {
        resources.extend(builder.create(input, context)?);
    }
    Ok(resources)
}

/// [`run_builders`] plus the metrics and summary log of one generation run
pub fn run_pipeline<I>(
    pipeline: &str,
    builders: &[ResourceBuilder<I>],
    input: &I,
    context: Option<&RequestContext>,
) -> Result<Vec<GeneratedResource>, GenerateError> {
    let start = Instant::now();
    metrics::increment_generations(pipeline);

    let result = run_builders(builders, input, context);
    metrics::observe_generation_duration(start.elapsed().as_secs_f64());

    match &result {
        Ok(resources) => {
            for resource in resources {
                metrics::increment_resources_generated(&resource.kind());
            }
            info!(
                pipeline,
                resources = resources.len(),
                typed = context.is_some(),
                "Generated resources"
            );
        }
        Err(e) => {
            metrics::increment_generation_errors(pipeline);
            error!(pipeline, error = %e, "Failed to generate resources");
        }
    }

    result
}
