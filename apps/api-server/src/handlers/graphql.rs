//! GraphQL transport - HTTP execution, WebSocket subscriptions, GraphiQL.

use actix_web::{HttpRequest, HttpResponse, web};
use async_graphql::Data;
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};

use crate::graphql::BlogSchema;

/// Where GraphiQL should send operations.
#[derive(Debug, Clone)]
pub struct GraphiqlEndpoint(pub String);

/// POST <graphql_path> - queries and mutations.
pub async fn graphql_handler(
    schema: web::Data<BlogSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GET <graphql_path> with `Upgrade: websocket` - the `postUpvoted` subscription.
pub async fn graphql_subscription(
    schema: web::Data<BlogSchema>,
    req: HttpRequest,
    payload: web::Payload,
) -> actix_web::Result<HttpResponse> {
    GraphQLSubscription::new(schema.get_ref().clone())
        .on_connection_init(|_params| async {
            tracing::info!("Connected to websocket");
            Ok(Data::default())
        })
        .start(&req, payload)
}

/// GET <graphql_path> - GraphiQL IDE.
pub async fn graphiql(endpoint: web::Data<GraphiqlEndpoint>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            GraphiQLSource::build()
                .endpoint(&endpoint.0)
                .subscription_endpoint(&endpoint.0)
                .finish(),
        )
}
