//! Notification port.
//!
//! The engine decides *that* a notification is due; delivery (push, SMS,
//! websocket fan-out) belongs to the embedding application. Delivery failure
//! must never fail the mutation that triggered it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::models::{EntryId, EntryStatus, LocationId};

/// Events emitted after successful queue mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueueEvent {
    /// The waiting set for a location changed (check-in or any lifecycle
    /// transition); positions and wait estimates are stale.
    QueueChanged { location_id: LocationId },

    /// One entry moved through the lifecycle state machine.
    EntryStatusChanged {
        entry_id: EntryId,
        location_id: LocationId,
        from: EntryStatus,
        to: EntryStatus,
    },
}

/// Notification delivery error.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Fire-and-forget event sink.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, event: QueueEvent) -> Result<(), NotifyError>;
}

/// Notifier that drops every event. Useful for tests and embedders that poll
/// instead of subscribing.
#[derive(Debug, Clone, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn publish(&self, _event: QueueEvent) -> Result<(), NotifyError> {
        Ok(())
    }
}
