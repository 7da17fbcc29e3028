//! topogate-save — post-persist save lifecycle.
//!
//! Activated only after the cluster resource has been persisted by an
//! external collaborator. Awaits a backend readiness condition, then a
//! registered completion callback, in that order; only then is the
//! save complete and follow-on navigation allowed.

pub mod error;
pub mod lifecycle;

pub use error::{SaveError, SaveResult};
pub use lifecycle::{
    CompletionCallback, ReadinessWaiter, SaveLifecycle, DEFAULT_READY_CONDITION,
};
