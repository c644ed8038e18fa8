//! Client entity.
//!
//! The loyalty tier is always derived from `visit_count` and `is_vip` at the
//! moment of check-in; it is never stored on the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ClientId;

/// A client who can check in to a location's queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique client identifier
    pub id: ClientId,

    /// Display name
    pub name: String,

    /// Number of completed visits
    pub visit_count: u32,

    /// Manually granted VIP flag
    pub is_vip: bool,

    /// Timestamp of the most recent completed visit
    pub last_visit: Option<DateTime<Utc>>,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ClientId::new(),
            name: name.into(),
            visit_count: 0,
            is_vip: false,
            last_visit: None,
        }
    }

    pub fn with_visits(mut self, visit_count: u32) -> Self {
        self.visit_count = visit_count;
        self
    }

    pub fn with_vip(mut self, is_vip: bool) -> Self {
        self.is_vip = is_vip;
        self
    }

    /// Record a completed visit.
    pub fn record_visit(&mut self, at: DateTime<Utc>) {
        self.visit_count += 1;
        self.last_visit = Some(at);
    }
}
