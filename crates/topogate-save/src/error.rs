//! Save lifecycle error types.

use thiserror::Error;

/// Result type alias for save lifecycle operations.
pub type SaveResult<T> = Result<T, SaveError>;

/// Errors that end an in-progress save.
///
/// All of these are fatal to the save in flight. The cluster resource
/// may already exist on the backend when they occur; the lifecycle
/// does not attempt compensating deletion.
#[derive(Debug, Error)]
pub enum SaveError {
    /// `did_save` was called before a completion callback was
    /// registered. Registration must happen during initialization.
    #[error("completion callback not registered before save")]
    CompletionNotRegistered,

    #[error("readiness condition '{condition}' failed: {source}")]
    Readiness {
        condition: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("completion callback failed: {0}")]
    Completion(#[source] anyhow::Error),
}
