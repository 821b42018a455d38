//! ArgoCD Operator Types
//!
//! Kubernetes custom resource types for the `ArgoCD` resource
//! (`argoproj.io/v1alpha1`), the schema registry that replaces
//! import-time type registration, and JSON/YAML codecs for manifests.
//!
//! ## Quick Start
//!
//! ```rust
//! use argocd_operator_types::prelude::*;
//!
//! let mut scheme = Scheme::new();
//! add_to_scheme(&mut scheme).unwrap();
//! assert!(scheme.recognizes("argoproj.io/v1alpha1", "ArgoCDList"));
//! ```

pub mod codec;
pub mod config;
pub mod constants;
pub mod crd;
pub mod error;
pub mod observability;
pub mod prelude;
pub mod scheme;

pub use error::SchemaError;
