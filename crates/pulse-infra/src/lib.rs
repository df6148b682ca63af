//! # Pulse Infrastructure
//!
//! Concrete implementations of the ports defined in `pulse-core`.
//! Everything lives in process memory: the seeded dataset and the
//! broadcast-backed event bus.

pub mod dataset;
pub mod pubsub;

pub use dataset::{InMemoryDataset, SeedData, SeedError};
pub use pubsub::InMemoryEventBus;
