//! Persistence port for client loyalty state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainResult;
use crate::domain::models::ClientId;

/// The slice of client state the classifier reads at check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltySnapshot {
    pub visit_count: u32,
    pub is_vip: bool,
}

/// Repository port for client loyalty reads and visit accounting.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Read the client's loyalty snapshot as of now.
    async fn loyalty_snapshot(&self, id: ClientId) -> DomainResult<Option<LoyaltySnapshot>>;

    /// Record a completed visit: increment the visit count and stamp the
    /// last-visit timestamp.
    async fn record_visit(&self, id: ClientId, at: DateTime<Utc>) -> DomainResult<()>;
}
