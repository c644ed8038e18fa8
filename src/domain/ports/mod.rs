//! Port traits for external collaborators.
//!
//! The engine owns none of these: persistence, agent rostering, and event
//! delivery are supplied by the embedding application. All ports are object
//! safe so services can hold `Arc<dyn ...>`.

pub mod agent_pool;
pub mod cache_backend;
pub mod client_store;
pub mod entry_store;
pub mod notifier;
pub mod service_catalog;

pub use agent_pool::AgentPool;
pub use cache_backend::{CacheBackend, CacheError};
pub use client_store::{ClientStore, LoyaltySnapshot};
pub use entry_store::EntryStore;
pub use notifier::{NoopNotifier, Notifier, NotifyError, QueueEvent};
pub use service_catalog::ServiceCatalog;
