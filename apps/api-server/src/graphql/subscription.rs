use async_graphql::{Context, Result, Subscription};
use futures::{Stream, StreamExt};

use super::error::GraphQLResultExt;
use super::service;
use super::types::PostObject;

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Emits the upvoted post, read again at delivery time.
    /// Null if the post is gone by then.
    async fn post_upvoted(
        &self,
        ctx: &Context<'_>,
    ) -> Result<impl Stream<Item = Result<Option<PostObject>>>> {
        let upvotes = service(ctx)?.post_upvotes().await.into_gql()?;
        Ok(upvotes.map(|resolved| resolved.map(|post| post.map(PostObject)).into_gql()))
    }
}
