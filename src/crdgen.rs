//! # CRD Generator
//!
//! Generates the Kubernetes CustomResourceDefinition (CRD) YAML for the
//! `ArgoCD` resource from the Rust type definitions.
//!
//! ## Usage
//!
//! ```bash
//! # Generate CRD YAML
//! cargo run --bin crdgen > deploy/crds/argoproj.io_argocds_crd.yaml
//!
//! # Generate and apply directly
//! cargo run --bin crdgen | kubectl apply -f -
//! ```
//!
//! The generated CRD includes:
//! - OpenAPI schema validation
//! - Required fields
//! - Status subresource
//! - `Phase` printer column

use argocd_operator_types::crd::ArgoCD;
use kube::core::CustomResourceExt;

fn main() {
    let crd = ArgoCD::crd();

    match serde_yaml::to_string(&crd) {
        Ok(yaml) => {
            print!("{yaml}");
        }
        Err(e) => {
            eprintln!("Failed to serialize CRD to YAML: {e}");
            std::process::exit(1);
        }
    }
}
