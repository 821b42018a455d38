//! # Import
//!
//! Import/restore of Argo CD data from an `ArgoCDExport`.

use super::RequiredKeys;
use serde::{Deserialize, Serialize};

/// Desired state of the import/restore process
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["name"]))]
pub struct ArgoCDImportSpec {
    /// Name of the ArgoCDExport to import from
    #[serde(default)]
    pub name: String,
    /// Namespace of the ArgoCDExport
    /// Defaults to the namespace of the ArgoCD resource when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ArgoCDImportSpec {
    /// Namespace to read the export from, falling back to `own_namespace`
    #[must_use]
    pub fn namespace_or<'a>(&'a self, own_namespace: &'a str) -> &'a str {
        self.namespace.as_deref().unwrap_or(own_namespace)
    }
}
