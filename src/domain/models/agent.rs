//! Agent entity representing a barber/server at a location.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{AgentId, LocationId};

/// Agent status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Available,
    Busy,
    OnBreak,
    Offline,
}

impl AgentStatus {
    /// Whether the agent counts toward wait-time capacity.
    ///
    /// Busy agents still count: they will free up and keep serving the queue.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Available | Self::Busy)
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Busy => write!(f, "busy"),
            Self::OnBreak => write!(f, "on_break"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

impl FromStr for AgentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "busy" => Ok(Self::Busy),
            "on_break" => Ok(Self::OnBreak),
            "offline" => Ok(Self::Offline),
            _ => Err(format!("invalid agent status: {s}")),
        }
    }
}

/// An agent who serves queue entries at a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent identifier
    pub id: AgentId,

    /// Location the agent works at
    pub location_id: LocationId,

    /// Display name
    pub name: String,

    /// Current status
    pub status: AgentStatus,
}

impl Agent {
    pub fn new(location_id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id: AgentId::new(),
            location_id,
            name: name.into(),
            status: AgentStatus::Available,
        }
    }

    pub fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this agent counts toward wait-time capacity.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_statuses() {
        assert!(AgentStatus::Available.is_active());
        assert!(AgentStatus::Busy.is_active());
        assert!(!AgentStatus::OnBreak.is_active());
        assert!(!AgentStatus::Offline.is_active());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            AgentStatus::Available,
            AgentStatus::Busy,
            AgentStatus::OnBreak,
            AgentStatus::Offline,
        ] {
            assert_eq!(status.to_string().parse::<AgentStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("BUSY".parse::<AgentStatus>().unwrap(), AgentStatus::Busy);
        assert!("retired".parse::<AgentStatus>().is_err());
    }
}
