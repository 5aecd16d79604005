//! Common error types used across the workspace.
//!
//! Each layer works with typed errors and converts upward into
//! [`SyncPartError`] via `#[from]`. The `Display` text of the client-facing
//! variants is part of the HTTP contract and must not drift.

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum SyncPartError {
    /// The request itself was malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested entity does not exist. A normal outcome, not a fault.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The content-lookup collaborator failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Client input errors, recovered locally at the HTTP boundary.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The `identifier` query parameter was absent or empty.
    #[error("Missing identifier parameter")]
    MissingIdentifier,
}

/// No entity carries the requested identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Identifier {identifier} is unknown")]
pub struct NotFoundError {
    /// The token the caller asked for, echoed verbatim.
    pub identifier: String,
}

/// Failure inside the content-lookup collaborator.
///
/// Carried opaquely and propagated unchanged: the core never retries and
/// never reinterprets a lookup failure as "not found".
#[derive(Debug, thiserror::Error)]
#[error("content lookup failed")]
pub struct LookupError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl LookupError {
    /// Wrap a collaborator failure.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}
