//! Topology safety rules.
//!
//! Rules run in a fixed order (etcd → management → worker) and each
//! appends at most one error, so collaborators can present the list
//! in a stable sequence. The validator is a pure function of the
//! scope mode and the derived counts; it never re-derives counts
//! itself.

use serde::{Deserialize, Serialize};
use tracing::warn;

use topogate_topology::{RoleCounts, ScopeMode};

/// Which safety rule a topology failed.
///
/// Identifiers only; mapping to user-facing text is the display
/// layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// etcd count is not quorum-safe (must be 1, 3, or 5).
    EtcdUnsafe,
    /// No control-plane node assigned.
    ManagementUnsafe,
    /// No worker node assigned.
    WorkerUnsafe,
}

impl ValidationError {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationError::EtcdUnsafe => "etcd_unsafe",
            ValidationError::ManagementUnsafe => "management_unsafe",
            ValidationError::WorkerUnsafe => "worker_unsafe",
        }
    }
}

/// Check the topology against the safety rules for the active scope.
///
/// In `dedicated` scope all three rules apply; in `unified` scope only
/// worker presence is required. An empty result means the topology is
/// deployable.
pub fn validate(mode: ScopeMode, counts: &RoleCounts) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if mode == ScopeMode::Dedicated {
        if !counts.etcd_safe() {
            errors.push(ValidationError::EtcdUnsafe);
        }
        if !counts.controlplane_safe() {
            errors.push(ValidationError::ManagementUnsafe);
        }
    }

    if !counts.worker_safe() {
        errors.push(ValidationError::WorkerUnsafe);
    }

    if !errors.is_empty() {
        warn!(
            mode = ?mode,
            etcd = counts.etcd,
            controlplane = counts.controlplane,
            worker = counts.worker,
            failed = ?errors,
            "topology failed validation"
        );
    }

    errors
}

/// True iff the topology passes every rule and may be deployed.
pub fn may_proceed(mode: ScopeMode, counts: &RoleCounts) -> bool {
    validate(mode, counts).is_empty()
}
