//! Port for the agent roster.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Agent, LocationId};

/// Roster port resolving the currently active agents for a location.
///
/// Active means available or busy; agents on break or offline do not count
/// toward wait-time capacity.
#[async_trait]
pub trait AgentPool: Send + Sync {
    /// List the active agents at a location.
    async fn active_agents(&self, location_id: LocationId) -> DomainResult<Vec<Agent>>;

    /// Count the active agents at a location.
    async fn active_agent_count(&self, location_id: LocationId) -> DomainResult<usize> {
        Ok(self.active_agents(location_id).await?.len())
    }
}
