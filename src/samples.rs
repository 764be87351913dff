//! # Samples
//!
//! Sample manifests printed by `ocmlogctl init`.

use crate::constants::LATEST_API_VERSION;

const FORWARDER_V1ALPHA1: &str = r#"apiVersion: apps.dustinscott.io/v1alpha1
kind: OCMLogForwarder
metadata:
  name: ocmlogforwarder-sample
  namespace: default
spec:
  #collection:
    #name: "ocmlogforwarderconfig-sample"
    #namespace: ""
  forwarderVersion: "latest"
  ocm:
    clusterId: "22tgckqk9c2ff3jd8ve62p0i2st14vrq"
    pollInternalMinutes: 5
    secretRef: "ocm-token"
  backend:
    type: "elasticsearch"
    elasticSearch:
      url: "https://elasticsearch-es-http.elastic-system.svc.cluster.local:9200"
      authType: "basic"
      index: "ocm_service_logs"
      secretRef: "elastic-auth"
  debug: false
"#;

const FORWARDER_V1ALPHA1_REQUIRED: &str = r#"apiVersion: apps.dustinscott.io/v1alpha1
kind: OCMLogForwarder
metadata:
  name: ocmlogforwarder-sample
  namespace: default
spec:
  #collection:
    #name: "ocmlogforwarderconfig-sample"
    #namespace: ""
  ocm:
    clusterId: "22tgckqk9c2ff3jd8ve62p0i2st14vrq"
"#;

const FORWARDER_CONFIG_V1ALPHA1: &str = r#"apiVersion: apps.dustinscott.io/v1alpha1
kind: OCMLogForwarderConfig
metadata:
  name: ocmlogforwarderconfig-sample
spec:
  provider: "rosa"
  forwarderNamespace: "ocm-log-forwarder"
  backend:
    type: "elasticsearch"
    elasticSearch:
      url: "https://elasticsearch-es-http.elastic-system.svc.cluster.local:9200"
      authType: "basic"
      index: "ocm_service_logs"
"#;

const FORWARDER_CONFIG_V1ALPHA1_REQUIRED: &str = r#"apiVersion: apps.dustinscott.io/v1alpha1
kind: OCMLogForwarderConfig
metadata:
  name: ocmlogforwarderconfig-sample
spec: {}
"#;

/// Resolve `latest` (or an empty string) to the newest served version
#[must_use]
pub fn resolve_api_version(api_version: &str) -> &str {
    if api_version.is_empty() || api_version == "latest" {
        LATEST_API_VERSION
    } else {
        api_version
    }
}

/// Sample OCMLogForwarder manifest, `None` for an unserved version
#[must_use]
pub fn forwarder(api_version: &str, required_only: bool) -> Option<&'static str> {
    match (resolve_api_version(api_version), required_only) {
        ("v1alpha1", false) => Some(FORWARDER_V1ALPHA1),
        ("v1alpha1", true) => Some(FORWARDER_V1ALPHA1_REQUIRED),
        _ => None,
    }
}

/// Sample OCMLogForwarderConfig manifest, `None` for an unserved version
#[must_use]
pub fn forwarder_config(api_version: &str, required_only: bool) -> Option<&'static str> {
    match (resolve_api_version(api_version), required_only) {
        ("v1alpha1", false) => Some(FORWARDER_CONFIG_V1ALPHA1),
        ("v1alpha1", true) => Some(FORWARDER_CONFIG_V1ALPHA1_REQUIRED),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_resolves_to_newest_version() {
        assert_eq!(resolve_api_version("latest"), "v1alpha1");
        assert_eq!(resolve_api_version(""), "v1alpha1");
        assert_eq!(resolve_api_version("v1alpha1"), "v1alpha1");
        assert_eq!(forwarder("latest", false), forwarder("v1alpha1", false));
    }

    #[test]
    fn test_unserved_version_has_no_sample() {
        assert!(forwarder("v1beta1", false).is_none());
        assert!(forwarder_config("v2", true).is_none());
    }
}
