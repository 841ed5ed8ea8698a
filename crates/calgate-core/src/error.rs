//! Domain error kinds shared by every resource service.
//!
//! Errors are returned as explicit values from repository and service
//! operations; mapping to HTTP status codes happens at the transport
//! boundary only (see `calgate-rest`).

use chrono::NaiveDateTime;
use thiserror::Error;

/// Result type for repository and service operations
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Error kinds produced by repositories and services.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// A required field was absent or empty (400-equivalent)
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// The create path received a caller-supplied identifier (400-equivalent).
    /// Identity is always repository-assigned.
    #[error("{kind} id is assigned by the repository and must not be supplied")]
    IdentitySupplied { kind: &'static str },

    /// An event's start bound did not strictly precede its end bound
    #[error("start {start} must be strictly before end {end}")]
    InvalidTimeRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Operation on a nonexistent resource id (404-equivalent)
    #[error("could not find {kind} {id}")]
    NotFound { kind: &'static str, id: String },

    /// Registration with an email that is already taken (400-equivalent)
    #[error("email already registered")]
    EmailAlreadyRegistered,

    /// Login field matching failed (401-equivalent). Deliberately not an
    /// auth subsystem: no token is issued or validated anywhere.
    #[error("{0}")]
    InvalidCredentials(&'static str),
}

impl CalendarError {
    /// Shorthand for the not-found case, used by every repository.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Whether this error is a missing-resource condition rather than
    /// invalid input.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Reject an empty or whitespace-only required string field.
pub fn require_field(field: &'static str, value: &str) -> CalendarResult<()> {
    if value.trim().is_empty() {
        return Err(CalendarError::MissingField { field });
    }
    Ok(())
}
