use async_graphql::{Context, Object, Result};

use super::error::GraphQLResultExt;
use super::service;
use super::types::PostObject;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add one vote to a post and notify `postUpvoted` subscribers.
    /// Fails with `NOT_FOUND` when no post has that id.
    async fn upvote_post(&self, ctx: &Context<'_>, post_id: i32) -> Result<Option<PostObject>> {
        let post = service(ctx)?.upvote_post(post_id).await.into_gql()?;
        Ok(Some(PostObject(post)))
    }
}
