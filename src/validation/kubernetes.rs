//! # Kubernetes Validation
//!
//! Validates Kubernetes resource names, namespaces, label values and image tags.
//!
//! Checks return a bare message; callers attach the field path.

use regex::Regex;

/// Validate Kubernetes resource name (RFC 1123 subdomain)
/// Format: lowercase alphanumeric, hyphens, dots
/// Length: 1-253 characters
/// Cannot start or end with hyphen or dot
pub fn validate_kubernetes_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("cannot be empty".to_string());
    }

    if name.len() > 253 {
        return Err(format!(
            "'{name}' exceeds maximum length of 253 characters (got {})",
            name.len()
        ));
    }

    let name_regex =
        Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
            .map_err(|e| format!("Failed to compile regex: {e}"))?;

    if !name_regex.is_match(name) {
        return Err(format!(
            "'{name}' must be a valid Kubernetes name (lowercase alphanumeric, hyphens, dots; cannot start/end with hyphen or dot)"
        ));
    }

    Ok(())
}

/// Validate Kubernetes namespace (RFC 1123 label)
/// Format: lowercase alphanumeric, hyphens
/// Length: 1-63 characters
/// Cannot start or end with hyphen
pub fn validate_kubernetes_namespace(namespace: &str) -> Result<(), String> {
    if namespace.is_empty() {
        return Err("cannot be empty".to_string());
    }

    if namespace.len() > 63 {
        return Err(format!(
            "'{namespace}' exceeds maximum length of 63 characters (got {})",
            namespace.len()
        ));
    }

    let namespace_regex = Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$")
        .map_err(|e| format!("Failed to compile regex: {e}"))?;

    if !namespace_regex.is_match(namespace) {
        return Err(format!(
            "'{namespace}' must be a valid Kubernetes namespace (lowercase alphanumeric, hyphens; cannot start/end with hyphen)"
        ));
    }

    Ok(())
}

/// Validate Kubernetes label value
/// Forwarder names double as the `app.kubernetes.io/name` label value.
/// Length: 1-63 characters
pub fn validate_kubernetes_label(label: &str) -> Result<(), String> {
    if label.is_empty() {
        return Err("cannot be empty".to_string());
    }

    if label.len() > 63 {
        return Err(format!(
            "'{label}' exceeds maximum length of 63 characters (got {})",
            label.len()
        ));
    }

    let label_regex = Regex::new(r"^[a-z0-9]([-a-z0-9_.]*[a-z0-9])?$")
        .map_err(|e| format!("Failed to compile regex: {e}"))?;

    if !label_regex.is_match(label) {
        return Err(format!(
            "'{label}' must be a valid Kubernetes label (lowercase alphanumeric, hyphens, dots, underscores; cannot start/end with dot)"
        ));
    }

    Ok(())
}

/// Validate an OCI image tag
/// Format: alphanumeric, underscores, dots, hyphens; cannot start with dot or hyphen
/// Length: 1-128 characters
pub fn validate_image_tag(tag: &str) -> Result<(), String> {
    let tag_regex = Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}$")
        .map_err(|e| format!("Failed to compile regex: {e}"))?;

    if !tag_regex.is_match(tag) {
        return Err(format!("'{tag}' must be a valid image tag"));
    }

    Ok(())
}
