//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use argocd_operator_types::prelude::*;
//! ```

// CRD types - most commonly used
pub use crate::crd::*;

pub use crate::codec::{decode_manifests, decode_resource, Format};
pub use crate::error::SchemaError;
pub use crate::scheme::{RegisteredKind, Scheme};

// kube traits needed to work with the generated resource
pub use kube::core::{CustomResourceExt, Resource};
