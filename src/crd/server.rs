//! # Argo CD Server
//!
//! Options for the Argo CD API server: GRPC host, backing Service and
//! horizontal autoscaling.

use super::{is_false, RequiredKeys};
use k8s_openapi::api::autoscaling::v1::HorizontalPodAutoscalerSpec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Options for the Argo CD Server component
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDServerSpec {
    /// Autoscale options for the server
    #[serde(default)]
    pub autoscale: ArgoCDServerAutoscaleSpec,
    /// GRPC options for the server
    #[serde(default)]
    pub grpc: ArgoCDServerGRPCSpec,
    /// Hostname for the Ingress/Route resources
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    /// Run the server with `--insecure`
    #[serde(default, skip_serializing_if = "is_false")]
    pub insecure: bool,
    /// Options for the Service backing the server
    #[serde(default)]
    pub service: ArgoCDServerServiceSpec,
}

impl ArgoCDServerSpec {
    /// ServiceType the server's Service ends up with
    ///
    /// An empty type means the Kubernetes default, `ClusterIP`. Returns `None`
    /// for values outside the four Kubernetes service types.
    #[must_use]
    pub fn service_type(&self) -> Option<ServiceType> {
        if self.service.r#type.is_empty() {
            Some(ServiceType::ClusterIp)
        } else {
            self.service.known_type()
        }
    }
}

/// Autoscaling of the Argo CD Server component
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["enabled"]))]
pub struct ArgoCDServerAutoscaleSpec {
    /// Toggle autoscaling for the server
    #[serde(default)]
    pub enabled: bool,
    /// HorizontalPodAutoscaler options for the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpa: Option<HorizontalPodAutoscalerSpec>,
}

/// GRPC options for the Argo CD Server component
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["host"]))]
pub struct ArgoCDServerGRPCSpec {
    /// Hostname for the GRPC Ingress/Route resources
    #[serde(default)]
    pub host: String,
}

/// Service options for the Argo CD Server component
///
/// `type` is stored as written so that empty or newer values still decode;
/// [`ArgoCDServerServiceSpec::known_type`] gives the typed view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["type"]))]
pub struct ArgoCDServerServiceSpec {
    /// ServiceType of the Service resource
    #[serde(default, rename = "type")]
    pub r#type: String,
}

impl ArgoCDServerServiceSpec {
    /// Service options requesting `service_type`
    #[must_use]
    pub fn new(service_type: ServiceType) -> Self {
        ArgoCDServerServiceSpec {
            r#type: service_type.as_str().to_string(),
        }
    }

    /// Typed service type, or `None` when the stored value is not a Kubernetes ServiceType
    #[must_use]
    pub fn known_type(&self) -> Option<ServiceType> {
        self.r#type.parse().ok()
    }
}

/// Kubernetes `core/v1` ServiceType
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ServiceType {
    #[default]
    ClusterIp,
    NodePort,
    LoadBalancer,
    ExternalName,
}

impl ServiceType {
    /// Wire name of the service type
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::ClusterIp => "ClusterIP",
            ServiceType::NodePort => "NodePort",
            ServiceType::LoadBalancer => "LoadBalancer",
            ServiceType::ExternalName => "ExternalName",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service type string that is not one of the Kubernetes ServiceTypes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised service type {0:?}")]
pub struct UnknownServiceType(pub String);

impl FromStr for ServiceType {
    type Err = UnknownServiceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ClusterIP" => Ok(ServiceType::ClusterIp),
            "NodePort" => Ok(ServiceType::NodePort),
            "LoadBalancer" => Ok(ServiceType::LoadBalancer),
            "ExternalName" => Ok(ServiceType::ExternalName),
            other => Err(UnknownServiceType(other.to_string())),
        }
    }
}
