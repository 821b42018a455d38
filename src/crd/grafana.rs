//! # Grafana
//!
//! Grafana server options.

use super::RequiredKeys;
use serde::{Deserialize, Serialize};

/// Desired state of the Grafana server component
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["enabled"]))]
pub struct ArgoCDGrafanaSpec {
    /// Toggle Grafana support for this ArgoCD
    #[serde(default)]
    pub enabled: bool,
    /// Hostname for the Ingress/Route resources
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    /// Grafana container image
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Replica count for the Grafana Deployment
    /// `None` leaves the choice to the operator; `Some(0)` scales to zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    /// Grafana container image tag
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}
