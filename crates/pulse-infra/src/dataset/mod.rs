//! Dataset - seeded in-memory storage for authors and posts.

mod memory;
mod seed;

pub use memory::{InMemoryAuthorRepository, InMemoryDataset, InMemoryPostRepository};
pub use seed::{SeedData, SeedError};
