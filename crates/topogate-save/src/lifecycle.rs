//! Save lifecycle — the two-stage handshake after the cluster
//! resource is persisted.
//!
//! The surrounding application persists the cluster resource; only
//! after that succeeds does it hand the resource id to `did_save`,
//! which (1) awaits a named readiness condition on the backend, then
//! (2) awaits the completion callback registered during setup. The
//! two awaits are strictly sequential; the save is complete only when
//! both resolve.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::error::{SaveError, SaveResult};

/// Readiness condition awaited by default, signalling that the
/// backing namespace for the cluster resource exists.
pub const DEFAULT_READY_CONDITION: &str = "BackingNamespaceCreated";

type SaveFuture = std::pin::Pin<Box<dyn std::future::Future<Output = anyhow::Result<()>> + Send>>;

/// Awaits a named condition on the persisted cluster resource.
///
/// Supplied by the collaborator that owns backend access; resolves
/// when the condition is met, errors on failure or timeout.
pub type ReadinessWaiter = Arc<dyn Fn(String) -> SaveFuture + Send + Sync>;

/// Completion callback registered by the parent collaborator during
/// initialization, invoked once the resource is ready.
pub type CompletionCallback = Arc<dyn Fn() -> SaveFuture + Send + Sync>;

/// Drives the post-persist handshake for one wizard session.
pub struct SaveLifecycle {
    readiness: ReadinessWaiter,
    condition: String,
    completion: Option<CompletionCallback>,
}

impl SaveLifecycle {
    /// Create a lifecycle waiting on [`DEFAULT_READY_CONDITION`].
    pub fn new(readiness: ReadinessWaiter) -> Self {
        Self {
            readiness,
            condition: DEFAULT_READY_CONDITION.to_string(),
            completion: None,
        }
    }

    /// Override the readiness condition name.
    pub fn with_condition(mut self, condition: &str) -> Self {
        self.condition = condition.to_string();
        self
    }

    /// Register the completion callback. Must be called before any
    /// save; registering again replaces the previous callback.
    pub fn register_completion(&mut self, callback: CompletionCallback) {
        self.completion = Some(callback);
    }

    pub fn completion_registered(&self) -> bool {
        self.completion.is_some()
    }

    /// Run the handshake for a persisted cluster resource.
    ///
    /// Checks the completion-callback contract first, then awaits the
    /// readiness condition, then the completion callback. Any failure
    /// is fatal to the save; the persisted resource is left as-is.
    pub async fn did_save(&self, resource_id: &str) -> SaveResult<()> {
        let Some(completion) = &self.completion else {
            error!(resource = resource_id, "save attempted without a completion callback");
            return Err(SaveError::CompletionNotRegistered);
        };

        debug!(
            resource = resource_id,
            condition = %self.condition,
            "awaiting readiness condition"
        );
        (self.readiness)(self.condition.clone())
            .await
            .map_err(|source| {
                error!(
                    resource = resource_id,
                    condition = %self.condition,
                    error = %source,
                    "readiness condition failed, resource may exist unacknowledged"
                );
                SaveError::Readiness {
                    condition: self.condition.clone(),
                    source,
                }
            })?;

        debug!(resource = resource_id, "resource ready, running completion callback");
        completion().await.map_err(|source| {
            error!(resource = resource_id, error = %source, "completion callback failed");
            SaveError::Completion(source)
        })?;

        info!(resource = resource_id, "save complete");
        Ok(())
    }
}

impl std::fmt::Debug for SaveLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveLifecycle")
            .field("condition", &self.condition)
            .field("completion_registered", &self.completion.is_some())
            .finish()
    }
}
