//! # ArgoCD List
//!
//! Collection wrapper returned by list calls against the ArgoCD API.

use super::{is_default, ArgoCD};
use crate::constants::LIST_KIND;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::Resource;
use serde::{Deserialize, Serialize};

/// A list of ArgoCD resources
///
/// `items` keeps the order in which the resources were retrieved; the order
/// carries no meaning beyond that.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgoCDList {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "is_default")]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<ArgoCD>,
}

impl ArgoCDList {
    /// Create a list with `apiVersion` and `kind` filled in
    #[must_use]
    pub fn new(items: Vec<ArgoCD>) -> Self {
        ArgoCDList {
            api_version: ArgoCD::api_version(&()).into_owned(),
            kind: LIST_KIND.to_string(),
            metadata: ListMeta::default(),
            items,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArgoCD> {
        self.items.iter()
    }
}

impl IntoIterator for ArgoCDList {
    type Item = ArgoCD;
    type IntoIter = std::vec::IntoIter<ArgoCD>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArgoCDList {
    type Item = &'a ArgoCD;
    type IntoIter = std::slice::Iter<'a, ArgoCD>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<ArgoCD> for ArgoCDList {
    fn from_iter<I: IntoIterator<Item = ArgoCD>>(iter: I) -> Self {
        ArgoCDList::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::ArgoCDSpec;
    use serde_json::json;

    #[test]
    fn test_empty_list_writes_items() {
        let value = serde_json::to_value(ArgoCDList::new(Vec::new())).unwrap();
        assert_eq!(
            value,
            json!({ "apiVersion": "argoproj.io/v1alpha1", "kind": "ArgoCDList", "items": [] })
        );
    }

    #[test]
    fn test_items_keep_retrieval_order() {
        let list: ArgoCDList = ["second", "first", "third"]
            .into_iter()
            .map(|name| ArgoCD::new(name, ArgoCDSpec::default()))
            .collect();
        let value = serde_json::to_value(&list).unwrap();
        let decoded: ArgoCDList = serde_json::from_value(value).unwrap();
        let names: Vec<_> = decoded
            .iter()
            .filter_map(|item| item.metadata.name.as_deref())
            .collect();
        assert_eq!(names, ["second", "first", "third"]);
        assert_eq!(decoded, list);
    }

    #[test]
    fn test_list_metadata_decoded() {
        let list: ArgoCDList = serde_json::from_value(json!({
            "apiVersion": "argoproj.io/v1alpha1",
            "kind": "ArgoCDList",
            "metadata": { "resourceVersion": "4242", "continue": "abc" },
            "items": []
        }))
        .unwrap();
        assert_eq!(list.metadata.resource_version.as_deref(), Some("4242"));
        assert_eq!(list.metadata.continue_.as_deref(), Some("abc"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_missing_items_decode_empty() {
        let list: ArgoCDList = serde_json::from_value(json!({ "kind": "ArgoCDList" })).unwrap();
        assert!(list.is_empty());
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({ "kind": "ArgoCDList", "items": [] })
        );
    }
}
