//! In-memory agent pool.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Agent, AgentId, AgentStatus, LocationId};
use crate::domain::ports::AgentPool;

/// HashMap-backed [`AgentPool`].
#[derive(Default)]
pub struct MemoryAgentPool {
    agents: RwLock<HashMap<AgentId, Agent>>,
}

impl MemoryAgentPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an agent.
    pub async fn add(&self, agent: Agent) {
        self.agents.write().await.insert(agent.id, agent);
    }

    /// Change an agent's status.
    pub async fn set_status(&self, id: AgentId, status: AgentStatus) {
        if let Some(agent) = self.agents.write().await.get_mut(&id) {
            agent.status = status;
        }
    }
}

#[async_trait]
impl AgentPool for MemoryAgentPool {
    async fn active_agents(&self, location_id: LocationId) -> DomainResult<Vec<Agent>> {
        Ok(self
            .agents
            .read()
            .await
            .values()
            .filter(|a| a.location_id == location_id && a.is_active())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_counts_only_active_agents_at_location() {
        let pool = MemoryAgentPool::new();
        let location = LocationId::new();

        let available = Agent::new(location, "Ann");
        let busy = Agent::new(location, "Bo").with_status(AgentStatus::Busy);
        let on_break = Agent::new(location, "Cy").with_status(AgentStatus::OnBreak);
        let elsewhere = Agent::new(LocationId::new(), "Di");

        for agent in [available, busy, on_break, elsewhere] {
            pool.add(agent).await;
        }

        assert_eq!(pool.active_agent_count(location).await.unwrap(), 2);
    }
}
