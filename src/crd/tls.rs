//! # TLS
//!
//! CA and certificate options.

use super::RequiredKeys;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// TLS options for Argo CD
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDTLSSpec {
    /// CA options
    #[serde(default)]
    pub ca: ArgoCDCASpec,
    /// Custom TLS certificates for connecting Git repositories over HTTPS,
    /// keyed by server name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub certs: BTreeMap<String, String>,
}

/// CA options for Argo CD
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDCASpec {
    /// Name of the ConfigMap holding the CA certificate
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub config_map_name: String,
    /// Name of the Secret holding the CA certificate and key
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secret_name: String,
}

/// Certificate options for Argo CD
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["secretName"]))]
pub struct ArgoCDCertificateSpec {
    /// Name of the Secret holding the certificate and key
    #[serde(default)]
    pub secret_name: String,
}
