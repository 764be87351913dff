use crate::WorkloadKind;
use anyhow::{anyhow, Context, Result};
use ocm_log_forwarder::samples;
use std::io::Write;

pub fn init(kind: WorkloadKind, api_version: &str, required_only: bool) -> Result<()> {
    let manifest = match kind {
        WorkloadKind::Forwarder => samples::forwarder(api_version, required_only),
        WorkloadKind::Config => samples::forwarder_config(api_version, required_only),
    }
    .ok_or_else(|| anyhow!("unsupported API Version: {api_version}"))
    .with_context(|| format!("Unable to get manifest for {}", kind.kind_name()))?;

    std::io::stdout()
        .write_all(manifest.as_bytes())
        .context("Failed to write to stdout")?;

    Ok(())
}
