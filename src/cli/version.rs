use crate::WorkloadKind;
use ocm_log_forwarder::constants::{API_GROUP, API_VERSIONS, LATEST_API_VERSION};

pub fn version(kind: WorkloadKind) {
    println!("ocmlogctl {}", env!("CARGO_PKG_VERSION"));
    println!("  git commit: {}", env!("BUILD_GIT_HASH"));
    println!("  built:      {}", env!("BUILD_DATETIME"));
    println!();
    println!("{} ({API_GROUP})", kind.kind_name());
    for api_version in API_VERSIONS {
        let marker = if *api_version == LATEST_API_VERSION {
            " (latest)"
        } else {
            ""
        };
        println!("  {api_version}{marker}");
    }
}
