//! # Ingress
//!
//! Options for the Ingress resources created for Argo CD.

use super::RequiredKeys;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Desired state of the Ingress resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["enabled"]))]
pub struct ArgoCDIngressSpec {
    /// Annotations to set on the Ingress resource
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    /// Toggle Ingress support for this ArgoCD
    #[serde(default)]
    pub enabled: bool,
    /// Path used for the Ingress resource
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
}
