//! # CLI Tests
//!
//! Runs the `ocmlogctl` binary against manifest files on disk.

mod common;

use common::*;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn ocmlogctl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ocmlogctl"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Should run ocmlogctl")
}

fn manifest_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(content.as_bytes())
        .expect("Should write manifest");
    file
}

fn path(file: &NamedTempFile) -> &str {
    file.path().to_str().expect("Temp path should be UTF-8")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn test_init_prints_sample() {
    let output = ocmlogctl(&["init", "forwarder", "--required-only"]);
    assert!(output.status.success());
    let sample: ocm_log_forwarder::OcmLogForwarder =
        serde_yaml::from_str(&stdout(&output)).expect("Sample should parse");
    assert_eq!(sample.spec.ocm.poll_interval_minutes, 5);
}

#[test]
fn test_init_rejects_unknown_version() {
    let output = ocmlogctl(&["init", "config", "--api-version", "v9"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported API Version: v9"));
}

#[test]
fn test_generate_forwarder_writes_yaml_stream() {
    let workload = manifest_file(FORWARDER_FULL);
    let output = ocmlogctl(&["generate", "forwarder", "--workload-manifest", path(&workload)]);
    assert!(output.status.success());

    let stream = stdout(&output);
    assert_eq!(stream.matches("---\n").count(), 6);
    assert!(stream.contains("kind: Deployment"));
    assert!(stream.contains("name: sample-elastic"));
}

#[test]
fn test_generate_forwarder_with_collection() {
    let workload = manifest_file(FORWARDER_FULL);
    let collection = manifest_file(COLLECTION);
    let output = ocmlogctl(&[
        "generate",
        "forwarder",
        "-w",
        path(&workload),
        "-c",
        path(&collection),
    ]);
    assert!(output.status.success());

    let stream = stdout(&output);
    assert_eq!(stream.matches("---\n").count(), 1);
    assert!(stream.contains("serviceAccountName: collection"));
}

#[test]
fn test_generate_config_writes_yaml_stream() {
    let collection = manifest_file(COLLECTION);
    let output = ocmlogctl(&["generate", "config", "--collection-manifest", path(&collection)]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("kind: Namespace"));
}

#[test]
fn test_generate_fails_on_invalid_manifest() {
    let workload = manifest_file(FORWARDER_UNSUPPORTED_BACKEND);
    let output = ocmlogctl(&["generate", "forwarder", "-w", path(&workload)]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("spec.backend.type"));
}

#[test]
fn test_generate_fails_on_missing_file() {
    let output = ocmlogctl(&["generate", "config", "-c", "/nonexistent/collection.yaml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read manifest"));
}

#[test]
fn test_version_lists_served_versions() {
    let output = ocmlogctl(&["version", "forwarder"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("OCMLogForwarder (apps.dustinscott.io)"));
    assert!(stdout.contains("v1alpha1 (latest)"));
}
