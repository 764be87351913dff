use anyhow::{bail, Context, Result};
use ocm_log_forwarder::manifest::manifest_api_version;
use ocm_log_forwarder::resources::{to_yaml_stream, GeneratedResource};
use ocm_log_forwarder::{forwarder, forwarder_config};
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub fn generate_forwarder(workload_manifest: &Path, collection_manifest: Option<&Path>) -> Result<()> {
    let workload = read_manifest(workload_manifest)?;
    let collection = collection_manifest.map(read_manifest).transpose()?;

    let resources = match manifest_api_version(&workload)?.as_str() {
        "v1alpha1" => forwarder::generate_for_cli(&workload, collection.as_deref())
            .context("Unable to generate resources for OCMLogForwarder")?,
        other => bail!("unsupported API Version: {other}"),
    };

    write_resources(&resources)
}

pub fn generate_config(collection_manifest: &Path) -> Result<()> {
    let collection = read_manifest(collection_manifest)?;

    let resources = match manifest_api_version(&collection)?.as_str() {
        "v1alpha1" => forwarder_config::generate_for_cli(&collection)
            .context("Unable to generate resources for OCMLogForwarderConfig")?,
        other => bail!("unsupported API Version: {other}"),
    };

    write_resources(&resources)
}

fn read_manifest(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Reading manifest");
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))
}

fn write_resources(resources: &[GeneratedResource]) -> Result<()> {
    let stream = to_yaml_stream(resources).context("Failed to render resources as YAML")?;
    std::io::stdout()
        .write_all(stream.as_bytes())
        .context("Failed to write to stdout")?;
    Ok(())
}
