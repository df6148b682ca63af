use async_trait::async_trait;

use crate::domain::{Author, Post};
use crate::error::RepoError;

/// Generic read access shared by every repository.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// Author repository. Authors are fixed for the lifetime of the process,
/// so lookup by id is all the API needs.
pub trait AuthorRepository: BaseRepository<Author, i32> {}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// All posts in insertion order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Posts written by `author_id`, in insertion order.
    async fn find_by_author_id(&self, author_id: i32) -> Result<Vec<Post>, RepoError>;

    /// Add one vote to the post and return its new state.
    ///
    /// The read-modify-write is atomic with respect to other callers.
    /// Returns `Ok(None)` when no post has that id.
    async fn increment_votes(&self, id: i32) -> Result<Option<Post>, RepoError>;
}
