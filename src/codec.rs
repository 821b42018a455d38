//! # Codec
//!
//! Encoding and decoding of ArgoCD documents.
//!
//! Decoding is lenient about unknown keys: documents written by newer
//! operator versions still decode, the extra keys are dropped. A key that is
//! present with the wrong type is always an error.

use crate::constants::LIST_KIND;
use crate::crd::{ArgoCD, ArgoCDList, ArgoCDStatus};
use crate::error::{Result, SchemaError};
use kube::core::TypeMeta;
use kube::Resource;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Document format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    #[default]
    Yaml,
}

impl Format {
    /// Infer the format from a file extension
    ///
    /// Anything that is not `.json` is treated as YAML, which is a superset of JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("JSON"),
            Format::Yaml => f.write_str("YAML"),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(format!("unsupported format '{other}', expected json or yaml")),
        }
    }
}

pub fn from_json<T: DeserializeOwned>(input: &str) -> Result<T> {
    serde_json::from_str(input).map_err(|e| SchemaError::decode(Format::Json, e))
}

pub fn from_yaml<T: DeserializeOwned>(input: &str) -> Result<T> {
    serde_yaml::from_str(input).map_err(|e| SchemaError::decode(Format::Yaml, e))
}

pub fn decode<T: DeserializeOwned>(input: &str, format: Format) -> Result<T> {
    match format {
        Format::Json => from_json(input),
        Format::Yaml => from_yaml(input),
    }
}

/// Pretty-printed JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| SchemaError::encode(Format::Json, e))
}

pub fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| SchemaError::encode(Format::Yaml, e))
}

pub fn encode<T: Serialize>(value: &T, format: Format) -> Result<String> {
    match format {
        Format::Json => to_json(value),
        Format::Yaml => to_yaml(value),
    }
}

/// Encode one `ArgoCD` resource, always writing `status`
///
/// A resource whose status was never set is written with `status.phase: ""`.
pub fn encode_resource(argocd: &ArgoCD, format: Format) -> Result<String> {
    encode(&with_status(argocd.clone()), format)
}

/// Encode several resources as one `ArgoCDList`, each item carrying `status`
pub fn encode_resources(items: &[ArgoCD], format: Format) -> Result<String> {
    let list: ArgoCDList = items.iter().cloned().map(with_status).collect();
    encode(&list, format)
}

fn with_status(mut argocd: ArgoCD) -> ArgoCD {
    argocd.status.get_or_insert_with(ArgoCDStatus::default);
    argocd
}

/// Decode a single `ArgoCD` document, checking its `apiVersion` and `kind`
pub fn decode_resource(input: &str, format: Format) -> Result<ArgoCD> {
    let value: serde_json::Value = decode(input, format)?;
    let types = type_meta(&value, format)?;
    if !is_argocd(&types) {
        return Err(unexpected_type(&types, &ArgoCD::kind(&())));
    }
    serde_json::from_value(value).map_err(|e| SchemaError::decode(format, e))
}

/// Decode every ArgoCD resource in `input`
///
/// YAML input may hold several `---` separated documents. `ArgoCDList`
/// documents are flattened into their items; documents of any other kind are
/// skipped. Resources are returned in document order.
pub fn decode_manifests(input: &str, format: Format) -> Result<Vec<ArgoCD>> {
    let documents = match format {
        Format::Json => vec![from_json::<serde_json::Value>(input)?],
        Format::Yaml => yaml_documents(input)?,
    };

    let mut resources = Vec::new();
    for (index, value) in documents.into_iter().enumerate() {
        if value.is_null() {
            continue;
        }
        let types = type_meta(&value, format)?;
        if is_argocd(&types) {
            resources.push(serde_json::from_value(value).map_err(|e| SchemaError::decode(format, e))?);
        } else if is_argocd_list(&types) {
            let list: ArgoCDList =
                serde_json::from_value(value).map_err(|e| SchemaError::decode(format, e))?;
            debug!(document = index, items = list.len(), "expanding ArgoCDList");
            resources.extend(list);
        } else {
            debug!(
                document = index,
                api_version = %types.api_version,
                kind = %types.kind,
                "skipping document of another kind"
            );
        }
    }
    Ok(resources)
}

/// Read a manifest file and decode every ArgoCD resource in it
pub fn decode_file(path: &Path) -> Result<Vec<ArgoCD>> {
    let input = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = Format::from_path(path);
    let resources = decode_manifests(&input, format)?;
    if resources.is_empty() {
        warn!(path = %path.display(), "no ArgoCD resources found");
    }
    Ok(resources)
}

fn yaml_documents(input: &str) -> Result<Vec<serde_json::Value>> {
    serde_yaml::Deserializer::from_str(input)
        .map(|document| {
            serde_json::Value::deserialize(document)
                .map_err(|e| SchemaError::decode(Format::Yaml, e))
        })
        .collect()
}

fn type_meta(value: &serde_json::Value, format: Format) -> Result<TypeMeta> {
    TypeMeta::deserialize(value).map_err(|e| SchemaError::decode(format, e))
}

fn is_argocd(types: &TypeMeta) -> bool {
    types.api_version == ArgoCD::api_version(&()) && types.kind == ArgoCD::kind(&())
}

fn is_argocd_list(types: &TypeMeta) -> bool {
    types.api_version == ArgoCD::api_version(&()) && types.kind == LIST_KIND
}

fn unexpected_type(types: &TypeMeta, expected_kind: &str) -> SchemaError {
    SchemaError::UnexpectedType {
        expected: format!("{}/{expected_kind}", ArgoCD::api_version(&())),
        found: format!("{}/{}", types.api_version, types.kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::ArgoCDSpec;

    const MINIMAL: &str = r#"
apiVersion: argoproj.io/v1alpha1
kind: ArgoCD
metadata:
  name: example-argocd
spec: {}
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("argocd.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("argocd.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("argocd.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("argocd")), Format::Yaml);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("yml".parse::<Format>(), Ok(Format::Yaml));
        assert_eq!("JSON".parse::<Format>(), Ok(Format::Json));
        assert!("toml".parse::<Format>().is_err());
    }

    #[test]
    fn test_decode_resource() {
        let argocd = decode_resource(MINIMAL, Format::Yaml).unwrap();
        assert_eq!(argocd.metadata.name.as_deref(), Some("example-argocd"));
        assert_eq!(argocd.spec, ArgoCDSpec::default());
        assert!(argocd.status.is_none());
    }

    #[test]
    fn test_decode_resource_wrong_kind() {
        let input = MINIMAL.replace("kind: ArgoCD", "kind: ArgoCDExport");
        let err = decode_resource(&input, Format::Yaml).unwrap_err();
        assert!(err.is_decode());
        match err {
            SchemaError::UnexpectedType { expected, found } => {
                assert_eq!(expected, "argoproj.io/v1alpha1/ArgoCD");
                assert_eq!(found, "argoproj.io/v1alpha1/ArgoCDExport");
            }
            other => panic!("Expected UnexpectedType, got {other:?}"),
        }
    }

    #[test]
    fn test_type_mismatch_is_decode_error() {
        let input = MINIMAL.replace("spec: {}\n", "") + "spec:\n  controller:\n    processors:\n      operation: ten\n";
        let err = decode_resource(&input, Format::Yaml).unwrap_err();
        assert!(matches!(err, SchemaError::Decode { format: Format::Yaml, .. }));
    }

    #[test]
    fn test_decode_manifests_skips_other_kinds() {
        let input = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: argocd-cm
---
apiVersion: argoproj.io/v1alpha1
kind: ArgoCD
metadata:
  name: first
spec: {}
---
apiVersion: argoproj.io/v1alpha1
kind: ArgoCD
metadata:
  name: second
spec:
  version: v1.4.2
---
"#;
        let resources = decode_manifests(input, Format::Yaml).unwrap();
        let names: Vec<_> = resources
            .iter()
            .filter_map(|r| r.metadata.name.as_deref())
            .collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(resources[1].spec.version, "v1.4.2");
    }

    #[test]
    fn test_decode_manifests_expands_lists() {
        let input = r#"{
            "apiVersion": "argoproj.io/v1alpha1",
            "kind": "ArgoCDList",
            "items": [
                { "apiVersion": "argoproj.io/v1alpha1", "kind": "ArgoCD", "metadata": { "name": "a" }, "spec": {} },
                { "apiVersion": "argoproj.io/v1alpha1", "kind": "ArgoCD", "metadata": { "name": "b" }, "spec": {} }
            ]
        }"#;
        let resources = decode_manifests(input, Format::Json).unwrap();
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[1].metadata.name.as_deref(), Some("b"));
    }

    #[test]
    fn test_encode_drops_zero_scalars() {
        let mut argocd = decode_resource(MINIMAL, Format::Yaml).unwrap();
        argocd.spec.image = "quay.io/argoproj/argocd".to_string();
        let json = to_json(&argocd).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["spec"]["image"], "quay.io/argoproj/argocd");
        assert!(value["spec"].get("version").is_none());
        assert_eq!(value["spec"]["grafana"], serde_json::json!({ "enabled": false }));
    }

    #[test]
    fn test_encode_resource_always_writes_status() {
        let argocd = decode_resource(MINIMAL, Format::Yaml).unwrap();
        assert!(argocd.status.is_none());

        let value: serde_json::Value =
            from_json(&encode_resource(&argocd, Format::Json).unwrap()).unwrap();
        assert_eq!(value["status"], serde_json::json!({ "phase": "" }));

        let mut running = argocd.clone();
        running.status = Some(ArgoCDStatus::with_phase(crate::crd::ArgoCDPhase::Running));
        let value: serde_json::Value =
            from_yaml(&encode_resource(&running, Format::Yaml).unwrap()).unwrap();
        assert_eq!(value["status"], serde_json::json!({ "phase": "Running" }));
    }

    #[test]
    fn test_encode_resources_writes_status_per_item() {
        let argocd = decode_resource(MINIMAL, Format::Yaml).unwrap();
        let rendered = encode_resources(&[argocd.clone(), argocd], Format::Json).unwrap();
        let value: serde_json::Value = from_json(&rendered).unwrap();
        assert_eq!(value["kind"], "ArgoCDList");
        for item in value["items"].as_array().unwrap() {
            assert_eq!(item["status"]["phase"], "");
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = decode_file(Path::new("/nonexistent/argocd.yaml")).unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
        assert!(!err.is_decode());
    }
}
