//! # Redis

use serde::{Deserialize, Serialize};

/// Desired state of the Redis server component
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDRedisSpec {
    /// Redis container image
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Redis container image tag
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}
