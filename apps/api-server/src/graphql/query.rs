use async_graphql::{Context, Object, Result};

use super::error::GraphQLResultExt;
use super::service;
use super::types::{AuthorObject, PostObject};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let posts = service(ctx)?.list_posts().await.into_gql()?;
        Ok(posts.into_iter().map(PostObject).collect())
    }

    async fn post(&self, ctx: &Context<'_>, id: i32) -> Result<Option<PostObject>> {
        let post = service(ctx)?.get_post(id).await.into_gql()?;
        Ok(post.map(PostObject))
    }

    async fn author(&self, ctx: &Context<'_>, id: i32) -> Result<Option<AuthorObject>> {
        let author = service(ctx)?.get_author(id).await.into_gql()?;
        Ok(author.map(AuthorObject))
    }
}
