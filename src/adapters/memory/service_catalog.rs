//! In-memory service catalog.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ServiceType, ServiceTypeId};
use crate::domain::ports::ServiceCatalog;

/// HashMap-backed [`ServiceCatalog`].
#[derive(Default)]
pub struct MemoryServiceCatalog {
    services: RwLock<HashMap<ServiceTypeId, ServiceType>>,
}

impl MemoryServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a service type.
    pub async fn add(&self, service: ServiceType) {
        self.services.write().await.insert(service.id, service);
    }

    /// Read back a service type, for assertions.
    pub async fn get(&self, id: ServiceTypeId) -> Option<ServiceType> {
        self.services.read().await.get(&id).cloned()
    }
}

#[async_trait]
impl ServiceCatalog for MemoryServiceCatalog {
    async fn duration_minutes(&self, id: ServiceTypeId) -> DomainResult<Option<u32>> {
        Ok(self
            .services
            .read()
            .await
            .get(&id)
            .map(|s| s.duration_minutes))
    }

    async fn record_completion(&self, id: ServiceTypeId) -> DomainResult<()> {
        let mut services = self.services.write().await;
        let service = services
            .get_mut(&id)
            .ok_or(DomainError::ServiceTypeNotFound(id))?;
        service.popularity += 1;
        Ok(())
    }
}
