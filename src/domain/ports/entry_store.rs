//! Persistence port for queue entries.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{EntryId, LocationId, QueueEntry};

/// Repository port for queue entry persistence.
///
/// Implementations must make `update` atomic per entry; the coordinator
/// relies on that plus its own per-location serialization to keep the
/// waiting-set snapshot consistent.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Insert a new entry.
    async fn insert(&self, entry: &QueueEntry) -> DomainResult<()>;

    /// Get an entry by ID.
    async fn get(&self, id: EntryId) -> DomainResult<Option<QueueEntry>>;

    /// Atomically update one entry's status and fields.
    async fn update(&self, entry: &QueueEntry) -> DomainResult<()>;

    /// List all WAITING entries for a location, ordered by arrival.
    async fn list_waiting(&self, location_id: LocationId) -> DomainResult<Vec<QueueEntry>>;

    /// Allocate the next creation sequence number for a location.
    ///
    /// Sequence numbers are monotonically increasing and never reused; they
    /// are the stable tie-break for entries arriving in the same instant.
    async fn next_sequence(&self, location_id: LocationId) -> DomainResult<u64>;

    /// Persist recomputed positions for a location's waiting set.
    async fn update_positions(
        &self,
        location_id: LocationId,
        positions: &[(EntryId, u32)],
    ) -> DomainResult<()>;
}
