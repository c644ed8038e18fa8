//! Port for resolving service types.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::ServiceTypeId;

/// Catalog port resolving service durations and completion accounting.
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    /// Resolve a service type to its fixed duration in minutes.
    async fn duration_minutes(&self, id: ServiceTypeId) -> DomainResult<Option<u32>>;

    /// Bump the service type's popularity counter after a completion.
    async fn record_completion(&self, id: ServiceTypeId) -> DomainResult<()>;
}
