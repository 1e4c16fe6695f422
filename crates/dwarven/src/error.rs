use crate::lifecycle::LifecycleState;
use thiserror::Error;

/// A lifecycle operation was called in a state that does not allow it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("lifecycle is already initialized (state: {0:?})")]
    AlreadyInitialized(LifecycleState),
    #[error("lifecycle is not initialized")]
    NotInitialized,
}
