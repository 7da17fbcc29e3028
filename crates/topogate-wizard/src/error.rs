//! Wizard error types.

use thiserror::Error;

use topogate_save::SaveError;
use topogate_topology::TopologyError;
use topogate_validate::ValidationError;

/// Result type alias for wizard operations.
pub type WizardResult<T> = Result<T, WizardError>;

/// Errors surfaced by the provisioning wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The topology failed validation; save is blocked until the
    /// operator fixes the assignment.
    #[error("topology is not deployable: [{}]", .0.iter().map(|e| e.as_str()).collect::<Vec<_>>().join(", "))]
    TopologyUnsafe(Vec<ValidationError>),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Save(#[from] SaveError),
}
