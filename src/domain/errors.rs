//! Domain errors for the queue engine.

use thiserror::Error;

use crate::domain::models::{ClientId, EntryId, EntryStatus, LocationId, ServiceTypeId};

/// Domain-level errors that can occur in the queue engine.
///
/// Lifecycle guards and check-in validation produce typed variants; the
/// presentation layer owns any user-facing message formatting.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid transition from {from} to {to}")]
    InvalidTransition { from: EntryStatus, to: EntryStatus },

    #[error("queue entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("service type not found: {0}")]
    ServiceTypeNotFound(ServiceTypeId),

    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    #[error("location {0} is outside operating hours")]
    LocationClosed(String),

    #[error("location {location} is at capacity ({max_waiting} waiting)")]
    CapacityReached { location: String, max_waiting: u32 },

    #[error("store error: {0}")]
    Store(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Store(err.to_string())
    }
}
