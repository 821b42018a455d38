//! # Prometheus

use super::RequiredKeys;
use serde::{Deserialize, Serialize};

/// Desired state of the Prometheus component
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["enabled"]))]
pub struct ArgoCDPrometheusSpec {
    /// Toggle Prometheus support for this ArgoCD
    #[serde(default)]
    pub enabled: bool,
    /// Hostname for the Ingress/Route resources
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    /// Replica count for the Prometheus StatefulSet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_size_kept_apart_from_unset() {
        let scaled_down: ArgoCDPrometheusSpec =
            serde_json::from_value(json!({ "enabled": true, "size": 0 })).unwrap();
        let unset: ArgoCDPrometheusSpec =
            serde_json::from_value(json!({ "enabled": true })).unwrap();
        assert_eq!(scaled_down.size, Some(0));
        assert_eq!(unset.size, None);

        let scaled_down_value = serde_json::to_value(&scaled_down).unwrap();
        assert_eq!(scaled_down_value, json!({ "enabled": true, "size": 0 }));
        let unset_value = serde_json::to_value(&unset).unwrap();
        assert_eq!(unset_value, json!({ "enabled": true }));

        let decoded: ArgoCDPrometheusSpec = serde_json::from_value(scaled_down_value).unwrap();
        assert_eq!(decoded, scaled_down);
        assert_ne!(decoded, unset);
    }

    #[test]
    fn test_disabled_prometheus_still_writes_enabled() {
        let decoded: ArgoCDPrometheusSpec =
            serde_json::from_value(json!({ "host": "prometheus.example.com" })).unwrap();
        assert!(!decoded.enabled);
        assert_eq!(
            serde_json::to_value(&decoded).unwrap(),
            json!({ "enabled": false, "host": "prometheus.example.com" })
        );
    }
}
