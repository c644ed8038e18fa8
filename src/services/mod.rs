//! Queue engine services.

pub mod hours;
pub mod ordering;
pub mod queue_service;
pub mod wait_estimator;

pub use hours::{HoursValidator, LocalMoment};
pub use ordering::QueueOrdering;
pub use queue_service::QueueService;
pub use wait_estimator::{format_wait, WaitEstimator};
