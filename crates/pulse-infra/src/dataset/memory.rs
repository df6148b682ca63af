//! In-memory dataset - the only storage this server has.
//!
//! Entities are never added or removed after construction, so the
//! id -> position indexes are built once and stay valid. Only `Post::votes`
//! changes, and always under the posts write lock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pulse_core::domain::{Author, Post};
use pulse_core::error::RepoError;
use pulse_core::ports::{AuthorRepository, BaseRepository, PostRepository};

use super::seed::{SeedData, SeedError};

/// Read-only author store with O(1) lookup by id.
pub struct InMemoryAuthorRepository {
    authors: Vec<Author>,
    index: HashMap<i32, usize>,
}

/// Post store. Listing keeps insertion order; lookups go through the index.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
    index: HashMap<i32, usize>,
}

/// Both repositories, built from one validated seed.
#[derive(Clone)]
pub struct InMemoryDataset {
    pub authors: Arc<InMemoryAuthorRepository>,
    pub posts: Arc<InMemoryPostRepository>,
}

impl InMemoryDataset {
    /// Build the dataset, rejecting duplicate ids and negative vote counts.
    ///
    /// Posts whose author does not exist are kept; resolving their author
    /// yields `None`.
    pub fn new(seed: SeedData) -> Result<Self, SeedError> {
        let author_index = index_by_id("author", &seed.authors, |a: &Author| a.id)?;
        let post_index = index_by_id("post", &seed.posts, |p: &Post| p.id)?;

        if let Some(post) = seed.posts.iter().find(|p| p.votes < 0) {
            return Err(SeedError::NegativeVotes { id: post.id });
        }

        for post in &seed.posts {
            if !author_index.contains_key(&post.author_id) {
                tracing::warn!(
                    post_id = post.id,
                    author_id = post.author_id,
                    "Post references an unknown author"
                );
            }
        }

        tracing::info!(
            authors = seed.authors.len(),
            posts = seed.posts.len(),
            "Dataset loaded"
        );

        Ok(Self {
            authors: Arc::new(InMemoryAuthorRepository {
                authors: seed.authors,
                index: author_index,
            }),
            posts: Arc::new(InMemoryPostRepository {
                posts: RwLock::new(seed.posts),
                index: post_index,
            }),
        })
    }
}

fn index_by_id<T>(
    entity_type: &'static str,
    items: &[T],
    id_of: impl Fn(&T) -> i32,
) -> Result<HashMap<i32, usize>, SeedError> {
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let id = id_of(item);
        if index.insert(id, position).is_some() {
            return Err(SeedError::DuplicateId { entity_type, id });
        }
    }
    Ok(index)
}

#[async_trait]
impl BaseRepository<Author, i32> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, RepoError> {
        Ok(self.index.get(&id).map(|&i| self.authors[i].clone()))
    }
}

impl AuthorRepository for InMemoryAuthorRepository {}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let Some(&i) = self.index.get(&id) else {
            return Ok(None);
        };
        Ok(Some(self.posts.read().await[i].clone()))
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_author_id(&self, author_id: i32) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().filter(|p| p.is_by(author_id)).cloned().collect())
    }

    async fn increment_votes(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let Some(&i) = self.index.get(&id) else {
            return Ok(None);
        };

        // Hold the write guard across the read-modify-write.
        let mut posts = self.posts.write().await;
        let post = &mut posts[i];
        post.votes = post
            .votes
            .checked_add(1)
            .ok_or(RepoError::VoteOverflow { id })?;
        Ok(Some(post.clone()))
    }
}
