//! # CRD Generator
//!
//! Generates the CustomResourceDefinition YAML for `OCMLogForwarder` and
//! `OCMLogForwarderConfig` from the Rust type definitions.
//!
//! ## Usage
//!
//! ```bash
//! # Generate CRD YAML
//! cargo run --bin crdgen > config/crd/bases/apps.dustinscott.io.yaml
//!
//! # Generate and apply directly
//! cargo run --bin crdgen | kubectl apply -f -
//! ```

use kube::core::CustomResourceExt;
use ocm_log_forwarder::{OcmLogForwarder, OcmLogForwarderConfig};

fn main() {
    let crds = [OcmLogForwarder::crd(), OcmLogForwarderConfig::crd()];

    for crd in &crds {
        match serde_yaml::to_string(crd) {
            Ok(yaml) => {
                print!("---\n{yaml}");
            }
            Err(e) => {
                eprintln!("Failed to serialize CRD to YAML: {e}");
                std::process::exit(1);
            }
        }
    }
}
