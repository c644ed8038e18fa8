//! Service type entity.

use serde::{Deserialize, Serialize};

use super::ids::{LocationId, ServiceTypeId};

/// A service offered at a location, with a fixed expected duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceType {
    /// Unique service type identifier
    pub id: ServiceTypeId,

    /// Location offering this service
    pub location_id: LocationId,

    /// Display name
    pub name: String,

    /// Fixed duration in minutes, used for wait estimation
    pub duration_minutes: u32,

    /// Completion counter, bumped every time a service of this type finishes
    pub popularity: u32,
}

impl ServiceType {
    pub fn new(location_id: LocationId, name: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: ServiceTypeId::new(),
            location_id,
            name: name.into(),
            duration_minutes,
            popularity: 0,
        }
    }
}
