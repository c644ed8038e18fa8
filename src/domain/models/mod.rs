//! Domain models for the walk-in queue engine.

pub mod agent;
pub mod client;
pub mod config;
pub mod entry;
pub mod ids;
pub mod location;
pub mod service_type;
pub mod tier;

pub use agent::{Agent, AgentStatus};
pub use client::Client;
pub use config::{CacheConfig, Config, LoggingConfig};
pub use entry::{EntryStatus, QueueEntry};
pub use ids::{AgentId, ClientId, EntryId, LocationId, ServiceTypeId};
pub use location::Location;
pub use service_type::ServiceType;
pub use tier::PriorityTier;
