//! Domain-level error types.

use thiserror::Error;

/// Domain errors - values the domain types refuse to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid time slot: {0} (expected HH:mm)")]
    InvalidTimeSlot(String),
}

/// API-level errors - failures talking to the remote service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server returned {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Entity not found")]
    NotFound,
}

/// Errors surfaced by the schedule form controller.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("An email address is required before registering a schedule")]
    EmailRequired,

    #[error("Time slot {0} is not offered")]
    UnknownSlot(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}
