//! topogate-wizard — the provisioning session facade.
//!
//! Ties the engine together for collaborators:
//!
//! ```text
//! ProvisioningWizard
//!   ├── ClusterTopology (topogate-topology: nodes, roles, counts)
//!   ├── validate / may_proceed (topogate-validate: rule checks)
//!   └── SaveLifecycle (topogate-save: post-persist handshake)
//! ```
//!
//! Mutations flow one way: node edit → recount → validation read.
//! `finish_save` gates the handshake on an error-free topology.

pub mod error;
pub mod wizard;

pub use error::{WizardError, WizardResult};
pub use wizard::ProvisioningWizard;
