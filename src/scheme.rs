//! # Scheme
//!
//! Explicit registry of resource types known to an application.
//!
//! Nothing registers itself: the application builds a [`Scheme`] during its
//! own start-up and calls the `add_to_scheme` functions of the API groups it
//! needs, e.g. [`crate::crd::add_to_scheme`].

use crate::constants::LIST_KIND_SUFFIX;
use crate::error::{Result, SchemaError};
use kube::core::{ApiResource, GroupVersionKind};
use kube::Resource;
use std::collections::BTreeMap;
use tracing::debug;

/// A resource type recorded in a [`Scheme`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredKind {
    /// Group, version, kind and plural of the item type
    pub resource: ApiResource,
    /// Kind of the matching list type, e.g. `ArgoCDList`
    pub list_kind: String,
}

impl RegisteredKind {
    #[must_use]
    pub fn gvk(&self) -> GroupVersionKind {
        GroupVersionKind::gvk(
            &self.resource.group,
            &self.resource.version,
            &self.resource.kind,
        )
    }

    fn matches_kind(&self, kind: &str) -> bool {
        self.resource.kind == kind || self.list_kind == kind
    }
}

/// Registry of resource types, keyed by `apiVersion` and kind
#[derive(Debug, Clone, Default)]
pub struct Scheme {
    kinds: BTreeMap<(String, String), RegisteredKind>,
}

impl Scheme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `K` and its list kind
    ///
    /// Fails when a type with the same `apiVersion` and kind is already present.
    pub fn register<K>(&mut self) -> Result<()>
    where
        K: Resource<DynamicType = ()>,
    {
        let resource = ApiResource::erase::<K>(&());
        let key = (resource.api_version.clone(), resource.kind.clone());
        if self.kinds.contains_key(&key) {
            return Err(SchemaError::AlreadyRegistered(format!(
                "{}/{}",
                resource.api_version, resource.kind
            )));
        }

        let list_kind = format!("{}{LIST_KIND_SUFFIX}", resource.kind);
        debug!(
            api_version = %resource.api_version,
            kind = %resource.kind,
            list_kind = %list_kind,
            "registered resource type"
        );
        self.kinds.insert(key, RegisteredKind { resource, list_kind });
        Ok(())
    }

    /// Find the entry for `gvk`, matching either the item kind or its list kind
    #[must_use]
    pub fn lookup(&self, gvk: &GroupVersionKind) -> Option<&RegisteredKind> {
        self.kinds.values().find(|entry| {
            entry.resource.group == gvk.group
                && entry.resource.version == gvk.version
                && entry.matches_kind(&gvk.kind)
        })
    }

    /// Whether a document with this `apiVersion` and `kind` belongs to a registered type
    #[must_use]
    pub fn recognizes(&self, api_version: &str, kind: &str) -> bool {
        self.kinds
            .values()
            .any(|entry| entry.resource.api_version == api_version && entry.matches_kind(kind))
    }

    pub fn kinds(&self) -> impl Iterator<Item = &RegisteredKind> {
        self.kinds.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{add_to_scheme, ArgoCD};
    use k8s_openapi::api::core::v1::ConfigMap;

    #[test]
    fn test_register_argocd() {
        let mut scheme = Scheme::new();
        assert!(scheme.is_empty());
        add_to_scheme(&mut scheme).unwrap();
        assert_eq!(scheme.len(), 1);

        let entry = scheme
            .lookup(&GroupVersionKind::gvk("argoproj.io", "v1alpha1", "ArgoCD"))
            .unwrap();
        assert_eq!(entry.resource.plural, "argocds");
        assert_eq!(entry.list_kind, "ArgoCDList");
        assert_eq!(entry.gvk().kind, "ArgoCD");
    }

    #[test]
    fn test_list_kind_recognized() {
        let mut scheme = Scheme::new();
        add_to_scheme(&mut scheme).unwrap();
        assert!(scheme.recognizes("argoproj.io/v1alpha1", "ArgoCD"));
        assert!(scheme.recognizes("argoproj.io/v1alpha1", "ArgoCDList"));
        assert!(!scheme.recognizes("argoproj.io/v1beta1", "ArgoCD"));
        assert!(!scheme.recognizes("argoproj.io/v1alpha1", "ArgoCDExport"));

        let list = scheme.lookup(&GroupVersionKind::gvk("argoproj.io", "v1alpha1", "ArgoCDList"));
        assert!(list.is_some());
    }

    #[test]
    fn test_double_registration_rejected() {
        let mut scheme = Scheme::new();
        scheme.register::<ArgoCD>().unwrap();
        let err = scheme.register::<ArgoCD>().unwrap_err();
        assert!(matches!(err, SchemaError::AlreadyRegistered(ref kind) if kind == "argoproj.io/v1alpha1/ArgoCD"));
        assert_eq!(scheme.len(), 1);
    }

    #[test]
    fn test_core_types_share_registry() {
        let mut scheme = Scheme::new();
        add_to_scheme(&mut scheme).unwrap();
        scheme.register::<ConfigMap>().unwrap();
        assert!(scheme.recognizes("v1", "ConfigMap"));
        assert!(scheme.recognizes("v1", "ConfigMapList"));

        let kinds: Vec<_> = scheme.kinds().map(|k| k.resource.kind.as_str()).collect();
        assert_eq!(kinds, ["ArgoCD", "ConfigMap"]);
    }

    #[test]
    fn test_separate_schemes_are_independent() {
        let mut first = Scheme::new();
        add_to_scheme(&mut first).unwrap();
        let second = Scheme::new();
        assert!(second.is_empty());
        assert!(!second.recognizes("argoproj.io/v1alpha1", "ArgoCD"));
    }
}
