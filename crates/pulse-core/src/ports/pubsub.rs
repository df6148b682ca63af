//! Pub/Sub port - abstraction over the upvote event bus.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

use crate::domain::PostUpvoted;

/// Name of the single topic upvote events travel on.
pub const POST_UPVOTED: &str = "POST_UPVOTED";

/// Per-listener stream of raw events. Dropping it unregisters the listener.
pub type EventStream = Pin<Box<dyn Stream<Item = PostUpvoted> + Send>>;

/// Event bus trait - fan-out of upvote events to every registered listener.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Publish an event to all listeners registered right now.
    /// Returns how many listeners it reached.
    async fn publish(&self, event: PostUpvoted) -> Result<usize, PubSubError>;

    /// Register a new listener.
    ///
    /// Registration is complete when this returns: any event published
    /// afterwards is delivered to the returned stream. Earlier events are not.
    async fn subscribe(&self) -> Result<EventStream, PubSubError>;

    /// Number of currently registered listeners.
    fn subscriber_count(&self) -> usize;
}

/// Pub/Sub errors.
#[derive(Debug, thiserror::Error)]
pub enum PubSubError {
    #[error("Failed to publish: {0}")]
    PublishError(String),

    #[error("Failed to subscribe: {0}")]
    SubscribeError(String),
}
