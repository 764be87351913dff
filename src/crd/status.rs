//! # Status
//!
//! Status written by the reconciling control plane. The generators never touch it;
//! it is declared so the generated CRDs carry the full status schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadStatus {
    #[serde(default)]
    pub created: bool,
    #[serde(default)]
    pub dependencies_satisfied: bool,
    #[serde(default)]
    pub conditions: Vec<PhaseCondition>,
    #[serde(default)]
    pub resources: Vec<ChildResource>,
}

/// Outcome of one reconciliation phase
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhaseCondition {
    pub phase: String,
    pub state: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub last_modified: Option<String>,
}

/// A child resource owned by the workload
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChildResource {
    pub group: String,
    pub version: String,
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub message: String,
}
