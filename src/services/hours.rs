//! Operating-hours validation.
//!
//! Decides whether a location currently accepts new entries. The engine does
//! no timezone handling; callers supply an already-localized weekday and
//! wall-clock time.

use chrono::{NaiveTime, Weekday};

use crate::domain::models::Location;

/// An already-localized point in the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    pub weekday: Weekday,
    pub time: NaiveTime,
}

impl LocalMoment {
    pub fn new(weekday: Weekday, time: NaiveTime) -> Self {
        Self { weekday, time }
    }
}

/// Validates a location's operating window.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoursValidator;

impl HoursValidator {
    pub fn new() -> Self {
        Self
    }

    /// Whether the location accepts new entries at the given moment.
    ///
    /// The window is half-open: a moment exactly at closing time is closed.
    pub fn is_open(&self, location: &Location, at: LocalMoment) -> bool {
        location.open_days.contains(&at.weekday)
            && location.opens_at <= at.time
            && at.time < location.closes_at
    }
}
