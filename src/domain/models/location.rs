//! Location entity: operating window, capacity, and queueing policy.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ids::LocationId;

/// A physical service location with its own queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Unique location identifier
    pub id: LocationId,

    /// Display name
    pub name: String,

    /// Local opening time
    pub opens_at: NaiveTime,

    /// Local closing time; the operating window is half-open, so a check-in
    /// exactly at this time is rejected
    pub closes_at: NaiveTime,

    /// Weekdays on which the location operates
    pub open_days: HashSet<Weekday>,

    /// Maximum number of entries allowed in WAITING at once
    pub max_waiting: u32,

    /// Whether queue ordering honors priority tiers (false = pure FIFO)
    pub priority_enabled: bool,
}

impl Location {
    /// Create a location with the given operating window, open every weekday,
    /// a waiting capacity of 50, and priority queueing disabled.
    pub fn new(name: impl Into<String>, opens_at: NaiveTime, closes_at: NaiveTime) -> Self {
        Self {
            id: LocationId::new(),
            name: name.into(),
            opens_at,
            closes_at,
            open_days: [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]
            .into_iter()
            .collect(),
            max_waiting: 50,
            priority_enabled: false,
        }
    }

    /// Set the operating weekdays.
    pub fn with_open_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.open_days = days.into_iter().collect();
        self
    }

    /// Set the waiting capacity.
    pub fn with_max_waiting(mut self, max_waiting: u32) -> Self {
        self.max_waiting = max_waiting;
        self
    }

    /// Enable or disable priority queueing.
    pub fn with_priority_enabled(mut self, enabled: bool) -> Self {
        self.priority_enabled = enabled;
        self
    }
}
