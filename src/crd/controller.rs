//! # Application Controller
//!
//! Options for the Argo CD application controller component.

use super::{is_zero, RequiredKeys};
use serde::{Deserialize, Serialize};

/// Processor counts for the application controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDApplicationControllerProcessorsSpec {
    /// Number of application operation processors
    #[serde(default, skip_serializing_if = "is_zero")]
    pub operation: i32,
    /// Number of application status processors
    #[serde(default, skip_serializing_if = "is_zero")]
    pub status: i32,
}

/// Application controller options
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["processors"]))]
pub struct ArgoCDApplicationControllerSpec {
    /// Processor counts; always written, even when both counts are zero
    #[serde(default)]
    pub processors: ArgoCDApplicationControllerProcessorsSpec,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_processors_always_written() {
        let spec = ArgoCDApplicationControllerSpec::default();
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value, json!({ "processors": {} }));
    }

    #[test]
    fn test_processors_require_integers() {
        let result: Result<ArgoCDApplicationControllerSpec, _> =
            serde_json::from_value(json!({ "processors": { "operation": "ten" } }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_processors_decode_to_zero() {
        let spec: ArgoCDApplicationControllerSpec = serde_json::from_value(json!({})).unwrap();
        assert_eq!(spec, ArgoCDApplicationControllerSpec::default());
        assert_eq!(serde_json::to_value(&spec).unwrap(), json!({ "processors": {} }));
    }
}
