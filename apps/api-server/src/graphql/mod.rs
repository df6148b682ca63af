//! GraphQL schema - queries, the upvote mutation and the upvote subscription.

mod error;
mod mutation;
mod query;
mod subscription;
mod types;

use std::sync::Arc;

use async_graphql::{Context, Schema};
use pulse_core::BlogService;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use subscription::SubscriptionRoot;

pub type BlogSchema = Schema<QueryRoot, MutationRoot, SubscriptionRoot>;

/// Build the schema with the service injected as context data.
pub fn build_schema(service: Arc<BlogService>) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, SubscriptionRoot)
        .data(service)
        .finish()
}

fn service<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<BlogService>> {
    ctx.data::<Arc<BlogService>>()
}
