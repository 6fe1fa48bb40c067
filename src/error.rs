// Error types for scoped resource management.
use std::io;
use thiserror::Error;

/// Outcome classification of a scoped block.
///
/// `E` is the error type shared by the acquisition, body, and release
/// operations; callers with several underlying failure modes unify them
/// into one enum (usually with `#[from]`) before entering the scope.
#[derive(Error, Debug, PartialEq)]
pub enum ScopeError<E> {
    /// Acquisition failed. The body and the release never ran.
    #[error("failed to acquire the resource: {0}")]
    Acquire(E),

    /// The body failed. The release ran anyway and may have failed too;
    /// the body failure stays the primary one.
    #[error("the scoped body failed: {body}")]
    Body { body: E, release: Option<E> },

    /// The body succeeded but the cleanup did not.
    #[error("failed to release the resource: {0}")]
    Release(E),
}

impl<E> ScopeError<E> {
    /// The body failure, if the body is what went wrong.
    pub fn body_error(&self) -> Option<&E> {
        match self {
            ScopeError::Body { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The cleanup failure, whether or not the body also failed.
    pub fn release_error(&self) -> Option<&E> {
        match self {
            ScopeError::Body { release, .. } => release.as_ref(),
            ScopeError::Release(e) => Some(e),
            ScopeError::Acquire(_) => None,
        }
    }
}

/// Lifecycle violations and I/O failures of a managed resource.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("the resource has not been acquired")]
    NotAcquired,

    #[error("the resource is already acquired")]
    AlreadyAcquired,

    #[error("the resource was already released")]
    AlreadyReleased,

    #[error("I/O failure on the underlying source: {0}")]
    Io(#[from] io::Error),
}
