//! Queueline - Walk-In Queue Engine
//!
//! Queueline is the domain engine for a single-location walk-in service queue:
//! clients check in, are ordered by priority tier and arrival, are served by
//! one of several agents, and leave the queue by completion, cancellation, or
//! no-show.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Pure business logic, domain models, and port
//!   traits for external collaborators (stores, notifier, cache backend)
//! - **Service Layer** (`services`): The pure queue engine (ordering, wait
//!   estimation, operating hours) and the async coordinator that wires it to
//!   the ports
//! - **Adapters** (`adapters`): In-process cache backend and in-memory stores
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//!
//! Transport, persistence, and presentation (HTTP, websockets, ORM mapping,
//! admin UI) live outside this crate and talk to it through the port traits.
//!
//! # Example
//!
//! ```ignore
//! use queueline::services::QueueService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Wire stores + notifier + cache into a QueueService and check in
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Agent, AgentStatus, CacheConfig, Client, Config, EntryStatus, Location, LoggingConfig,
    PriorityTier, QueueEntry, ServiceType,
};
pub use domain::ports::{
    AgentPool, CacheBackend, CacheError, ClientStore, EntryStore, LoyaltySnapshot, Notifier,
    NotifyError, QueueEvent, ServiceCatalog,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{HoursValidator, LocalMoment, QueueOrdering, QueueService, WaitEstimator};
