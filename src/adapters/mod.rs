//! Adapters: in-process implementations of the domain ports.

pub mod cache;
pub mod memory;
