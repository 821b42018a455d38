//! # ArgoCD Status
//!
//! Observed state reported by the operator.

use super::RequiredKeys;
use crate::constants::{PHASE_FAILED, PHASE_PENDING, PHASE_RUNNING, PHASE_UNKNOWN};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status of the ArgoCD resource
///
/// `phase` is kept as an open string so that values written by other
/// operator versions still decode. Use [`ArgoCDStatus::known_phase`] for a
/// typed view of the documented values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = RequiredKeys(&["phase"]))]
pub struct ArgoCDStatus {
    /// High-level summary of where the ArgoCD is in its lifecycle
    ///
    /// Pending: accepted by Kubernetes, but one or more required resources do not exist yet.
    /// Running: all containers are running, or starting/restarting.
    /// Failed: at least one container terminated in failure.
    /// Unknown: the state of the ArgoCD could not be obtained.
    #[serde(default)]
    pub phase: String,
}

impl ArgoCDStatus {
    /// Status recording one of the documented phases
    #[must_use]
    pub fn with_phase(phase: ArgoCDPhase) -> Self {
        ArgoCDStatus {
            phase: phase.as_str().to_string(),
        }
    }

    /// Typed phase, or `None` when the stored value is not one of the documented phases
    #[must_use]
    pub fn known_phase(&self) -> Option<ArgoCDPhase> {
        self.phase.parse().ok()
    }
}

/// Documented lifecycle phases of an ArgoCD resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgoCDPhase {
    Pending,
    Running,
    Failed,
    Unknown,
}

impl ArgoCDPhase {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgoCDPhase::Pending => PHASE_PENDING,
            ArgoCDPhase::Running => PHASE_RUNNING,
            ArgoCDPhase::Failed => PHASE_FAILED,
            ArgoCDPhase::Unknown => PHASE_UNKNOWN,
        }
    }
}

impl fmt::Display for ArgoCDPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A phase string outside the documented lifecycle phases
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised ArgoCD phase {0:?}")]
pub struct UnknownPhase(pub String);

impl FromStr for ArgoCDPhase {
    type Err = UnknownPhase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PHASE_PENDING => Ok(ArgoCDPhase::Pending),
            PHASE_RUNNING => Ok(ArgoCDPhase::Running),
            PHASE_FAILED => Ok(ArgoCDPhase::Failed),
            PHASE_UNKNOWN => Ok(ArgoCDPhase::Unknown),
            other => Err(UnknownPhase(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phase_always_written() {
        let value = serde_json::to_value(ArgoCDStatus::default()).unwrap();
        assert_eq!(value, json!({ "phase": "" }));
    }

    #[test]
    fn test_missing_phase_decodes_empty() {
        let status: ArgoCDStatus = serde_json::from_value(json!({})).unwrap();
        assert_eq!(status, ArgoCDStatus::default());
        assert_eq!(status.known_phase(), None);
    }

    #[test]
    fn test_undocumented_phase_still_decodes() {
        let status: ArgoCDStatus =
            serde_json::from_value(json!({ "phase": "Available" })).unwrap();
        assert_eq!(status.phase, "Available");
        assert_eq!(status.known_phase(), None);
    }

    #[test]
    fn test_known_phases() {
        for phase in [
            ArgoCDPhase::Pending,
            ArgoCDPhase::Running,
            ArgoCDPhase::Failed,
            ArgoCDPhase::Unknown,
        ] {
            let status = ArgoCDStatus::with_phase(phase);
            assert_eq!(status.phase, phase.to_string());
            assert_eq!(status.known_phase(), Some(phase));
        }
    }

    #[test]
    fn test_phase_parse_is_case_sensitive() {
        assert_eq!(
            "running".parse::<ArgoCDPhase>(),
            Err(UnknownPhase("running".to_string()))
        );
    }
}
