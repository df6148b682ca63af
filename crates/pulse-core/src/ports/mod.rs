//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod pubsub;
mod repository;

pub use pubsub::{EventBus, EventStream, POST_UPVOTED, PubSubError};
pub use repository::{AuthorRepository, BaseRepository, PostRepository};
