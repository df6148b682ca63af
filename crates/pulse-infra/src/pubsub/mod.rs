//! Pub/Sub implementations.

mod memory;

pub use memory::InMemoryEventBus;
