//! # RBAC
//!
//! Argo CD RBAC configuration. Values are passed through to `argocd-rbac-cm`
//! untouched; the policy CSV is not parsed here.

use serde::{Deserialize, Serialize};

/// Desired state of the Argo CD RBAC configuration
///
/// Every field is optional and distinguishes "unset" from "set to empty":
/// an empty `default_policy` explicitly clears the default role, while `None`
/// leaves the Argo CD default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDRBACSpec {
    /// Role Argo CD falls back to when authorizing API requests
    /// When empty, users can still log in but see no applications or projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_policy: Option<String>,
    /// CSV of user-defined policies and role definitions
    ///
    /// Policy rules: `p, subject, resource, action, object, effect`
    /// Role bindings: `g, subject, inherited-subject`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,
    /// OIDC scopes examined during enforcement, in addition to `sub`
    /// Argo CD defaults to `[groups]` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<String>,
}
