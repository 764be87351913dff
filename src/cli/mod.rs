//! # OCMLOGCTL CLI
//!
//! Command-line interface for generating OCM Log Forwarder resources offline.
//!
//! ## Usage
//!
//! ```bash
//! # Print a sample OCMLogForwarder manifest
//! ocmlogctl init forwarder > forwarder.yaml
//!
//! # Generate the child resources of a standalone forwarder
//! ocmlogctl generate forwarder --workload-manifest forwarder.yaml
//!
//! # Generate a collection-managed forwarder
//! ocmlogctl generate forwarder -w forwarder.yaml -c collection.yaml
//!
//! # Generate the collection's shared resources
//! ocmlogctl generate config --collection-manifest collection.yaml
//!
//! # Show the served API versions
//! ocmlogctl version forwarder
//! ```
//!
//! Manifests go to stdout, logs to stderr.

mod generate;
mod init;
mod version;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use ocm_log_forwarder::config::CliConfig;
use ocm_log_forwarder::observability;
use std::path::PathBuf;

/// OCM Log Forwarder CLI
#[derive(Parser)]
#[command(name = "ocmlogctl", version)]
#[command(
    about = "Manage OCM Log Forwarder workloads",
    long_about = None,
    after_help = "\
Available workload kinds:
  forwarder - OCMLogForwarder resource
  config    - OCMLogForwarderConfig resource

Examples:
  ocmlogctl init forwarder --required-only
  ocmlogctl generate forwarder -w forwarder.yaml
  ocmlogctl generate config -c collection.yaml
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample custom resource manifest to stdout
    Init {
        /// Workload kind
        #[arg(value_enum)]
        kind: WorkloadKind,
        /// API version of the sample ("latest" for the newest)
        #[arg(long, default_value = "latest")]
        api_version: String,
        /// Only include required fields
        #[arg(long)]
        required_only: bool,
    },
    /// Generate child resources from custom resource manifests
    Generate {
        #[command(subcommand)]
        target: GenerateTarget,
    },
    /// Display the API versions served for a workload kind
    Version {
        /// Workload kind
        #[arg(value_enum)]
        kind: WorkloadKind,
    },
}

#[derive(Subcommand)]
enum GenerateTarget {
    /// Generate the resources of an OCMLogForwarder
    Forwarder {
        /// Path to the OCMLogForwarder manifest
        #[arg(short, long)]
        workload_manifest: PathBuf,
        /// Path to the OCMLogForwarderConfig manifest the forwarder belongs to
        #[arg(short, long)]
        collection_manifest: Option<PathBuf>,
    },
    /// Generate the resources of an OCMLogForwarderConfig
    Config {
        /// Path to the OCMLogForwarderConfig manifest
        #[arg(short, long)]
        collection_manifest: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WorkloadKind {
    /// OCMLogForwarder
    Forwarder,
    /// OCMLogForwarderConfig
    Config,
}

impl WorkloadKind {
    fn kind_name(self) -> &'static str {
        match self {
            Self::Forwarder => "OCMLogForwarder",
            Self::Config => "OCMLogForwarderConfig",
        }
    }
}

fn main() -> Result<()> {
    let config = CliConfig::from_env();
    observability::init_logging(&config, "ocmlogctl")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            kind,
            api_version,
            required_only,
        } => init::init(kind, &api_version, required_only),
        Commands::Generate { target } => match target {
            GenerateTarget::Forwarder {
                workload_manifest,
                collection_manifest,
            } => generate::generate_forwarder(&workload_manifest, collection_manifest.as_deref()),
            GenerateTarget::Config {
                collection_manifest,
            } => generate::generate_config(&collection_manifest),
        },
        Commands::Version { kind } => {
            version::version(kind);
            Ok(())
        }
    }
}
