//! Blog service - answers reads, applies upvotes and fans them out to listeners.

use std::pin::Pin;
use std::sync::Arc;

use futures::{Stream, StreamExt};

use crate::domain::{Author, Post, PostUpvoted};
use crate::error::DomainError;
use crate::ports::{AuthorRepository, EventBus, EventStream, PostRepository};

/// Stream of upvoted posts, re-read at delivery time.
/// Yields `Ok(None)` when the post no longer exists.
pub type UpvoteStream = Pin<Box<dyn Stream<Item = Result<Option<Post>, DomainError>> + Send>>;

/// Entry point for every operation the API exposes.
///
/// Reads never fail on a missing entity; they return `None` or an empty list.
/// Only `upvote_post` treats a missing post as an error.
pub struct BlogService {
    authors: Arc<dyn AuthorRepository>,
    posts: Arc<dyn PostRepository>,
    events: Arc<dyn EventBus>,
}

impl BlogService {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        posts: Arc<dyn PostRepository>,
        events: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            authors,
            posts,
            events,
        }
    }

    /// All posts in dataset order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.list().await?)
    }

    pub async fn get_post(&self, id: i32) -> Result<Option<Post>, DomainError> {
        Ok(self.posts.find_by_id(id).await?)
    }

    pub async fn get_author(&self, id: i32) -> Result<Option<Author>, DomainError> {
        Ok(self.authors.find_by_id(id).await?)
    }

    /// Posts whose `author_id` equals `author_id`, in dataset order.
    pub async fn posts_by_author(&self, author_id: i32) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_by_author_id(author_id).await?)
    }

    /// `None` when the post points at an author that does not exist.
    pub async fn author_of_post(&self, post: &Post) -> Result<Option<Author>, DomainError> {
        Ok(self.authors.find_by_id(post.author_id).await?)
    }

    /// Add one vote to a post, then notify listeners.
    ///
    /// The increment is committed before the event is published, so a listener
    /// re-reading the post sees the new count. An unknown id fails with
    /// `DomainError::NotFound` and publishes nothing.
    pub async fn upvote_post(&self, post_id: i32) -> Result<Post, DomainError> {
        let post = self
            .posts
            .increment_votes(post_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "post",
                id: post_id,
            })?;

        // The vote is already counted; a lost notification does not undo it.
        match self.events.publish(PostUpvoted { id: post.id }).await {
            Ok(listeners) => {
                tracing::debug!(
                    post_id = post.id,
                    votes = post.votes,
                    listeners,
                    "Post upvoted"
                );
            }
            Err(e) => {
                tracing::error!(post_id = post.id, error = %e, "Failed to publish upvote");
            }
        }

        Ok(post)
    }

    /// Register a listener for raw upvote events.
    pub async fn subscribe_upvotes(&self) -> Result<EventStream, DomainError> {
        Ok(self.events.subscribe().await?)
    }

    /// Map a raw event back to the current state of its post.
    pub async fn resolve_upvote(&self, event: PostUpvoted) -> Result<Option<Post>, DomainError> {
        self.get_post(event.id).await
    }

    /// Register a listener and resolve each event it receives.
    pub async fn post_upvotes(self: &Arc<Self>) -> Result<UpvoteStream, DomainError> {
        let events = self.subscribe_upvotes().await?;
        let service = Arc::clone(self);

        Ok(Box::pin(events.then(move |event| {
            let service = Arc::clone(&service);
            async move { service.resolve_upvote(event).await }
        })))
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.subscriber_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepoError;
    use crate::ports::{BaseRepository, PubSubError};
    use async_trait::async_trait;
    use futures::FutureExt;
    use futures::channel::mpsc;
    use std::sync::Mutex;

    struct FakeAuthors(Vec<Author>);

    #[async_trait]
    impl BaseRepository<Author, i32> for FakeAuthors {
        async fn find_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
            Ok(self.0.iter().find(|a| a.id == id).cloned())
        }
    }

    impl AuthorRepository for FakeAuthors {}

    struct FakePosts(Mutex<Vec<Post>>);

    #[async_trait]
    impl BaseRepository<Post, i32> for FakePosts {
        async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
            Ok(self.0.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }
    }

    #[async_trait]
    impl PostRepository for FakePosts {
        async fn list(&self) -> Result<Vec<Post>, RepoError> {
            Ok(self.0.lock().unwrap().clone())
        }

        async fn find_by_author_id(&self, author_id: i32) -> Result<Vec<Post>, RepoError> {
            let posts = self.0.lock().unwrap();
            Ok(posts.iter().filter(|p| p.is_by(author_id)).cloned().collect())
        }

        async fn increment_votes(&self, id: i32) -> Result<Option<Post>, RepoError> {
            let mut posts = self.0.lock().unwrap();
            Ok(posts.iter_mut().find(|p| p.id == id).map(|post| {
                post.votes += 1;
                post.clone()
            }))
        }
    }

    /// Records every published event and forwards it to open listeners.
    #[derive(Default)]
    struct RecordingBus {
        published: Mutex<Vec<PostUpvoted>>,
        listeners: Mutex<Vec<mpsc::UnboundedSender<PostUpvoted>>>,
    }

    #[async_trait]
    impl EventBus for RecordingBus {
        async fn publish(&self, event: PostUpvoted) -> Result<usize, PubSubError> {
            self.published.lock().unwrap().push(event);
            let mut listeners = self.listeners.lock().unwrap();
            listeners.retain(|tx| tx.unbounded_send(event).is_ok());
            Ok(listeners.len())
        }

        async fn subscribe(&self) -> Result<EventStream, PubSubError> {
            let (tx, rx) = mpsc::unbounded();
            self.listeners.lock().unwrap().push(tx);
            Ok(Box::pin(rx))
        }

        fn subscriber_count(&self) -> usize {
            self.listeners.lock().unwrap().len()
        }
    }

    fn fixture() -> (Arc<BlogService>, Arc<RecordingBus>) {
        let authors = vec![
            Author::new(1, "Tom", "Coleman"),
            Author::new(2, "Sashko", "Stubailo"),
            Author::new(3, "Mikhail", "Novikov"),
        ];
        let posts = vec![
            Post::new(1, 1, "Introduction to GraphQL", 2),
            Post::new(2, 2, "Welcome to Meteor", 3),
            Post::new(3, 2, "Advanced GraphQL", 1),
            Post::new(4, 3, "Launchpad is Cool", 7),
            Post::new(5, 42, "Orphaned", 0),
        ];
        let bus = Arc::new(RecordingBus::default());
        let service = BlogService::new(
            Arc::new(FakeAuthors(authors)),
            Arc::new(FakePosts(Mutex::new(posts))),
            bus.clone(),
        );
        (Arc::new(service), bus)
    }

    fn votes(posts: &[Post]) -> Vec<(i32, i32)> {
        posts.iter().map(|p| (p.id, p.votes)).collect()
    }

    #[tokio::test]
    async fn test_get_post_returns_none_for_unknown_id() {
        let (service, _) = fixture();
        let post = service.get_post(2).await.unwrap().unwrap();
        assert_eq!(post.title.as_deref(), Some("Welcome to Meteor"));
        assert!(service.get_post(999).await.unwrap().is_none());
        assert!(service.get_author(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_posts_by_author_keeps_order_and_is_empty_on_miss() {
        let (service, _) = fixture();
        let posts = service.posts_by_author(2).await.unwrap();
        let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(service.posts_by_author(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_author_of_post_tolerates_dangling_reference() {
        let (service, _) = fixture();
        let orphan = service.get_post(5).await.unwrap().unwrap();
        assert!(service.author_of_post(&orphan).await.unwrap().is_none());

        for post in service.posts_by_author(1).await.unwrap() {
            let author = service.author_of_post(&post).await.unwrap().unwrap();
            assert_eq!(author.id, 1);
        }
    }

    #[tokio::test]
    async fn test_upvote_increments_only_target_post() {
        let (service, bus) = fixture();
        let before = votes(&service.list_posts().await.unwrap());

        let post = service.upvote_post(2).await.unwrap();
        assert_eq!(post, Post::new(2, 2, "Welcome to Meteor", 4));
        service.upvote_post(2).await.unwrap();

        let after = votes(&service.list_posts().await.unwrap());
        for ((id, old), (_, new)) in before.iter().zip(after.iter()) {
            let expected = if *id == 2 { old + 2 } else { *old };
            assert_eq!(*new, expected, "post {id}");
        }
        assert_eq!(*bus.published.lock().unwrap(), vec![PostUpvoted { id: 2 }; 2]);
    }

    #[tokio::test]
    async fn test_upvote_unknown_post_fails_without_side_effects() {
        let (service, bus) = fixture();
        let before = service.list_posts().await.unwrap();

        let err = service.upvote_post(999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity_type: "post", id: 999 }));
        assert_eq!(err.to_string(), "Couldn't find post with id 999");

        assert_eq!(service.list_posts().await.unwrap(), before);
        assert!(bus.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_listener_sees_incremented_votes() {
        let (service, _) = fixture();
        let mut upvotes = service.post_upvotes().await.unwrap();

        service.upvote_post(2).await.unwrap();

        let delivered = upvotes.next().await.unwrap().unwrap().unwrap();
        assert_eq!(delivered.votes, 4);
        assert_eq!(service.get_post(2).await.unwrap().unwrap().votes, 4);
    }

    #[tokio::test]
    async fn test_late_listener_receives_nothing() {
        let (service, _) = fixture();
        service.upvote_post(1).await.unwrap();

        let mut upvotes = service.post_upvotes().await.unwrap();
        assert!(upvotes.next().now_or_never().is_none());
    }

    #[tokio::test]
    async fn test_resolve_upvote_for_missing_post_is_none() {
        let (service, _) = fixture();
        let resolved = service.resolve_upvote(PostUpvoted { id: 999 }).await.unwrap();
        assert!(resolved.is_none());
    }
}
