//! Domain error type shared by the database and API layers.

use crate::types::DbId;

/// Domain-level error produced by core logic and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup failed.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a domain validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The operation conflicts with current state (duplicate join, full event).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed (e.g. non-organizer edit).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unexpected internal failure. The message is logged, never surfaced.
    #[error("Internal error: {0}")]
    Internal(String),
}
