//! GraphQL object types wrapping the domain entities.

use async_graphql::{Context, Object, Result};
use pulse_core::domain::{Author, Post};

use super::error::GraphQLResultExt;
use super::service;

pub struct AuthorObject(pub Author);

#[Object(name = "Author")]
impl AuthorObject {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn first_name(&self) -> Option<&str> {
        self.0.first_name.as_deref()
    }

    async fn last_name(&self) -> Option<&str> {
        self.0.last_name.as_deref()
    }

    /// the list of Posts by this author
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let posts = service(ctx)?.posts_by_author(self.0.id).await.into_gql()?;
        Ok(posts.into_iter().map(PostObject).collect())
    }
}

pub struct PostObject(pub Post);

#[Object(name = "Post")]
impl PostObject {
    async fn id(&self) -> i32 {
        self.0.id
    }

    async fn title(&self) -> Option<&str> {
        self.0.title.as_deref()
    }

    /// Null when the post refers to an author that does not exist.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<AuthorObject>> {
        let author = service(ctx)?.author_of_post(&self.0).await.into_gql()?;
        Ok(author.map(AuthorObject))
    }

    async fn votes(&self) -> Option<i32> {
        Some(self.0.votes)
    }
}
