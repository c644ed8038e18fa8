//! In-memory client store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Client, ClientId};
use crate::domain::ports::{ClientStore, LoyaltySnapshot};

/// HashMap-backed [`ClientStore`].
#[derive(Default)]
pub struct MemoryClientStore {
    clients: RwLock<HashMap<ClientId, Client>>,
}

impl MemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a client.
    pub async fn add(&self, client: Client) {
        self.clients.write().await.insert(client.id, client);
    }

    /// Read back a client, for assertions.
    pub async fn get(&self, id: ClientId) -> Option<Client> {
        self.clients.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    async fn loyalty_snapshot(&self, id: ClientId) -> DomainResult<Option<LoyaltySnapshot>> {
        Ok(self.clients.read().await.get(&id).map(|c| LoyaltySnapshot {
            visit_count: c.visit_count,
            is_vip: c.is_vip,
        }))
    }

    async fn record_visit(&self, id: ClientId, at: DateTime<Utc>) -> DomainResult<()> {
        let mut clients = self.clients.write().await;
        let client = clients
            .get_mut(&id)
            .ok_or(DomainError::ClientNotFound(id))?;
        client.record_visit(at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_reflects_current_state() {
        let store = MemoryClientStore::new();
        let client = Client::new("Ada").with_visits(12).with_vip(false);
        let id = client.id;
        store.add(client).await;

        let snapshot = store.loyalty_snapshot(id).await.unwrap().unwrap();
        assert_eq!(snapshot.visit_count, 12);
        assert!(!snapshot.is_vip);
    }

    #[tokio::test]
    async fn test_record_visit_unknown_client_fails() {
        let store = MemoryClientStore::new();
        assert!(matches!(
            store.record_visit(ClientId::new(), Utc::now()).await,
            Err(DomainError::ClientNotFound(_))
        ));
    }
}
