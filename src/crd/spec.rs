//! # ArgoCD Spec
//!
//! The `ArgoCD` custom resource and its aggregate desired-state spec.

use super::{
    is_false, ArgoCDApplicationControllerSpec, ArgoCDDexSpec, ArgoCDGrafanaSpec,
    ArgoCDImportSpec, ArgoCDIngressSpec, ArgoCDPrometheusSpec, ArgoCDRBACSpec, ArgoCDRedisSpec,
    ArgoCDServerSpec, ArgoCDTLSSpec,
};
use serde::{Deserialize, Serialize};

/// ArgoCD Custom Resource Definition
///
/// Desired state of one Argo CD deployment. Every field is optional; an
/// empty spec asks the operator for a default installation.
///
/// # Example
///
/// ```yaml
/// apiVersion: argoproj.io/v1alpha1
/// kind: ArgoCD
/// metadata:
///   name: example-argocd
///   namespace: argocd
/// spec:
///   grafana:
///     enabled: true
///     host: grafana.example.com
///   server:
///     grpc:
///       host: argocd.example.com
///     service:
///       type: ClusterIP
/// ```
#[derive(
    kube::CustomResource, Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema,
)]
#[kube(
    kind = "ArgoCD",
    group = "argoproj.io",
    version = "v1alpha1",
    namespaced,
    status = "crate::crd::ArgoCDStatus",
    derive = "Default",
    derive = "PartialEq",
    printcolumn = r#"{"name":"Phase", "type":"string", "jsonPath":".status.phase"}, {"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDSpec {
    /// Label key Argo CD uses to track application instances
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub application_instance_label_key: String,
    /// Additional config management plugins (YAML, passed through verbatim)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub config_management_plugins: String,
    /// Application controller options
    #[serde(default)]
    pub controller: ArgoCDApplicationControllerSpec,
    /// Dex server options
    #[serde(default)]
    pub dex: ArgoCDDexSpec,
    /// Google Analytics tracking ID
    #[serde(default, rename = "gaTrackingID", skip_serializing_if = "String::is_empty")]
    pub ga_tracking_id: String,
    /// Hash user IDs before sending them to Google Analytics
    #[serde(default, skip_serializing_if = "is_false")]
    pub ga_anonymize_users: bool,
    /// Grafana server options
    #[serde(default)]
    pub grafana: ArgoCDGrafanaSpec,
    /// URL for getting chat help, typically a Slack support channel
    #[serde(default, rename = "helpChatURL", skip_serializing_if = "String::is_empty")]
    pub help_chat_url: String,
    /// Text for getting chat help; Argo CD shows "Chat now!" when empty
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help_chat_text: String,
    /// Argo CD container image for all components
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
    /// Import/restore options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import: Option<ArgoCDImportSpec>,
    /// Ingress options
    #[serde(default)]
    pub ingress: ArgoCDIngressSpec,
    /// Build options passed to `kustomize build`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kustomize_build_options: String,
    /// OIDC configuration used instead of Dex
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub oidc_config: String,
    /// Prometheus options
    #[serde(default)]
    pub prometheus: ArgoCDPrometheusSpec,
    /// RBAC configuration
    #[serde(default)]
    pub rbac: ArgoCDRBACSpec,
    /// Redis server options
    #[serde(default)]
    pub redis: ArgoCDRedisSpec,
    /// Repositories to configure Argo CD with
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repositories: String,
    /// Resource behaviour customizations, keyed by `group/Kind`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_customizations: String,
    /// Resource group/kinds Argo CD ignores entirely
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_exclusions: String,
    /// Argo CD server options
    #[serde(default)]
    pub server: ArgoCDServerSpec,
    /// SSH known hosts for Git repositories accessed over SSH
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ssh_known_hosts: String,
    /// Enable the application status badge
    #[serde(default, skip_serializing_if = "is_false")]
    pub status_badge_enabled: bool,
    /// TLS options
    #[serde(default)]
    pub tls: ArgoCDTLSSpec,
    /// Allow anonymous access; anonymous users get the default role from `argocd-rbac-cm`
    #[serde(default, skip_serializing_if = "is_false")]
    pub users_anonymous_enabled: bool,
    /// Image tag for all Argo CD components
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl ArgoCD {
    /// Current phase as recorded by the operator, if any status was written
    #[must_use]
    pub fn phase(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.phase.as_str())
    }
}
