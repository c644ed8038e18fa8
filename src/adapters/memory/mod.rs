//! In-memory implementations of the store ports.
//!
//! Used by the test suites and by embedders that do not need durable
//! persistence. Each store is independently lockable and safe to share
//! behind an `Arc`.

pub mod agent_pool;
pub mod client_store;
pub mod entry_store;
pub mod service_catalog;

pub use agent_pool::MemoryAgentPool;
pub use client_store::MemoryClientStore;
pub use entry_store::MemoryEntryStore;
pub use service_catalog::MemoryServiceCatalog;
