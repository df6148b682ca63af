//! In-memory event bus.
//!
//! Works within a single process only.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use futures::stream;
use tokio::sync::mpsc;

use pulse_core::domain::PostUpvoted;
use pulse_core::ports::{EventBus, EventStream, POST_UPVOTED, PubSubError};

/// In-memory fan-out of upvote events over a single topic.
///
/// Every listener owns an unbounded queue, so a slow listener still gets
/// every event published while it is registered. Dropping a listener's
/// stream closes its queue and the next publish forgets it.
#[derive(Default)]
pub struct InMemoryEventBus {
    listeners: Mutex<Vec<mpsc::UnboundedSender<PostUpvoted>>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<mpsc::UnboundedSender<PostUpvoted>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, event: PostUpvoted) -> Result<usize, PubSubError> {
        let mut listeners = self.listeners();
        listeners.retain(|tx| tx.send(event).is_ok());
        let reached = listeners.len();

        if reached == 0 {
            tracing::debug!(
                channel = POST_UPVOTED,
                post_id = event.id,
                "No subscribers for channel"
            );
        } else {
            tracing::debug!(
                channel = POST_UPVOTED,
                post_id = event.id,
                listeners = reached,
                "Event published"
            );
        }

        Ok(reached)
    }

    async fn subscribe(&self) -> Result<EventStream, PubSubError> {
        let (tx, receiver) = mpsc::unbounded_channel();
        let subscribers = {
            let mut listeners = self.listeners();
            listeners.retain(|tx| !tx.is_closed());
            listeners.push(tx);
            listeners.len()
        };
        tracing::debug!(channel = POST_UPVOTED, subscribers, "Subscribed to channel");

        Ok(Box::pin(stream::unfold(
            Listener { receiver },
            |mut listener| async move {
                let event = listener.next().await?;
                Some((event, listener))
            },
        )))
    }

    fn subscriber_count(&self) -> usize {
        self.listeners().iter().filter(|tx| !tx.is_closed()).count()
    }
}

/// Receiving half of one subscription.
struct Listener {
    receiver: mpsc::UnboundedReceiver<PostUpvoted>,
}

impl Listener {
    async fn next(&mut self) -> Option<PostUpvoted> {
        let event = self.receiver.recv().await;
        if event.is_none() {
            tracing::info!(channel = POST_UPVOTED, "Channel closed");
        }
        event
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        tracing::debug!(channel = POST_UPVOTED, "Unsubscribed from channel");
    }
}
