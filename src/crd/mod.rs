//! # Custom Resource Definitions
//!
//! Schema types for the `ArgoCD` custom resource (`argoproj.io/v1alpha1`).
//!
//! The types are data only: desired state lives in [`ArgoCDSpec`], observed
//! state in [`ArgoCDStatus`]. Reconciling one towards the other is the job of
//! the operator that consumes this crate.
//!
//! ## Module Structure
//!
//! - `spec.rs` - The `ArgoCD` resource and its aggregate spec
//! - `controller.rs` - Application controller processors
//! - `dex.rs` - Dex server and OAuth options
//! - `grafana.rs`, `prometheus.rs` - Monitoring components
//! - `import.rs` - Import/restore from an ArgoCDExport
//! - `ingress.rs` - Ingress options
//! - `rbac.rs` - RBAC policy configuration
//! - `redis.rs` - Redis server options
//! - `server.rs` - Argo CD server, GRPC, service and autoscaling options
//! - `tls.rs` - CA and certificate options
//! - `status.rs` - Observed state and phase
//! - `list.rs` - `ArgoCDList` collection wrapper
//!
//! ## Encoding rules
//!
//! Scalar, string and map fields are omitted from the encoded document when
//! they hold their zero value. Nested sub-spec structs are always written,
//! and so are the required fields (`enabled` flags, GRPC host, service type,
//! import name, status phase), even at their zero value. A required field
//! missing from a decoded document takes its zero value; the CRD schema still
//! lists it as required. `Option` fields keep "unset" apart from "set to zero".

mod controller;
mod dex;
mod grafana;
mod import;
mod ingress;
mod list;
mod prometheus;
mod rbac;
mod redis;
mod server;
mod spec;
mod status;
mod tls;

// Re-export all public types
pub use controller::{ArgoCDApplicationControllerProcessorsSpec, ArgoCDApplicationControllerSpec};
pub use dex::{ArgoCDDexOAuthSpec, ArgoCDDexSpec};
pub use grafana::ArgoCDGrafanaSpec;
pub use import::ArgoCDImportSpec;
pub use ingress::ArgoCDIngressSpec;
pub use list::ArgoCDList;
pub use prometheus::ArgoCDPrometheusSpec;
pub use rbac::ArgoCDRBACSpec;
pub use redis::ArgoCDRedisSpec;
pub use server::{
    ArgoCDServerAutoscaleSpec, ArgoCDServerGRPCSpec, ArgoCDServerServiceSpec, ArgoCDServerSpec,
    ServiceType, UnknownServiceType,
};
pub use spec::{ArgoCD, ArgoCDSpec};
pub use status::{ArgoCDPhase, ArgoCDStatus, UnknownPhase};
pub use tls::{ArgoCDCASpec, ArgoCDCertificateSpec, ArgoCDTLSSpec};

use crate::error::Result;
use crate::scheme::Scheme;

/// Register the ArgoCD types with `scheme`
///
/// Call this once while building the application's registry. Registering
/// twice into the same scheme fails with [`crate::SchemaError::AlreadyRegistered`].
pub fn add_to_scheme(scheme: &mut Scheme) -> Result<()> {
    scheme.register::<ArgoCD>()
}

/// Schema transform that lists `keys` as required
///
/// Required fields carry `#[serde(default)]` so that documents missing them
/// decode to zero values, which would otherwise drop them from the schema's
/// `required` list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequiredKeys(pub &'static [&'static str]);

impl schemars::transform::Transform for RequiredKeys {
    fn transform(&mut self, schema: &mut schemars::Schema) {
        let Some(object) = schema.as_object_mut() else {
            return;
        };
        let required = object
            .entry("required")
            .or_insert_with(|| serde_json::Value::Array(Vec::new()));
        if let Some(list) = required.as_array_mut() {
            for key in self.0 {
                if !list.iter().any(|v| v.as_str() == Some(*key)) {
                    list.push(serde_json::Value::from(*key));
                }
            }
        }
    }
}

// serde skip helpers shared by the sub-specs

#[allow(clippy::trivially_copy_pass_by_ref, reason = "signature dictated by serde")]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "signature dictated by serde")]
pub(crate) fn is_zero(value: &i32) -> bool {
    *value == 0
}

pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}
