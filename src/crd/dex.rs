//! # Dex
//!
//! Dex server options.

use super::{is_false, RequiredKeys};
use serde::{Deserialize, Serialize};

/// Desired state of the Dex server component
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDDexSpec {
    /// Dex connector configuration (YAML, passed through verbatim)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub config: String,
    /// Dex container image
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Enable OpenShift OAuth authentication for Dex
    #[serde(
        default,
        rename = "openShiftOAuth",
        skip_serializing_if = "is_false"
    )]
    pub open_shift_oauth: bool,
    /// Dex container image tag
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

/// Dex OAuth toggle
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["enabled"]))]
pub struct ArgoCDDexOAuthSpec {
    /// Toggle OAuth for Dex
    #[serde(default)]
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_openshift_oauth_key() {
        let dex: ArgoCDDexSpec =
            serde_json::from_value(json!({ "openShiftOAuth": true, "image": "quay.io/dexidp/dex" }))
                .unwrap();
        assert!(dex.open_shift_oauth);
        assert_eq!(dex.image, "quay.io/dexidp/dex");
        assert!(dex.config.is_empty());

        let value = serde_json::to_value(&dex).unwrap();
        assert_eq!(
            value,
            json!({ "openShiftOAuth": true, "image": "quay.io/dexidp/dex" })
        );
    }

    #[test]
    fn test_oauth_enabled_written_when_false() {
        let value = serde_json::to_value(ArgoCDDexOAuthSpec::default()).unwrap();
        assert_eq!(value, json!({ "enabled": false }));
    }
}
