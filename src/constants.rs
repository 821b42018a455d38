//! # Constants
//!
//! Shared constants for the ArgoCD resource schema.

/// API group of the ArgoCD custom resource
pub const API_GROUP: &str = "argoproj.io";

/// API version of the ArgoCD custom resource
pub const API_VERSION: &str = "v1alpha1";

/// Kind of a single ArgoCD resource
pub const KIND: &str = "ArgoCD";

/// Kind of a list of ArgoCD resources
pub const LIST_KIND: &str = "ArgoCDList";

/// Suffix appended to a kind to form its list kind
pub const LIST_KIND_SUFFIX: &str = "List";

/// Status phase: accepted, but one or more required resources have not been created
pub const PHASE_PENDING: &str = "Pending";

/// Status phase: all containers are running, or starting/restarting
pub const PHASE_RUNNING: &str = "Running";

/// Status phase: at least one container terminated in failure
pub const PHASE_FAILED: &str = "Failed";

/// Status phase: the state could not be obtained
pub const PHASE_UNKNOWN: &str = "Unknown";

/// Environment variable selecting the default log level of the tools
pub const ENV_LOG_LEVEL: &str = "ARGOCD_SCHEMA_LOG_LEVEL";

/// Environment variable selecting the default output format of the tools
pub const ENV_OUTPUT_FORMAT: &str = "ARGOCD_SCHEMA_OUTPUT";

/// Environment variable enabling ANSI colors in log output
pub const ENV_LOG_COLOR: &str = "ARGOCD_SCHEMA_LOG_COLOR";

/// Default log level when neither `RUST_LOG` nor [`ENV_LOG_LEVEL`] is set
pub const DEFAULT_LOG_LEVEL: &str = "warn";
