//! HTTP handlers and route configuration.

mod graphql;
mod health;

use actix_web::{HttpRequest, HttpResponse, guard, web};
use pulse_shared::ErrorResponse;

use crate::config::AppConfig;
use crate::observability::RequestId;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, config: &AppConfig) {
    let mut endpoint = web::resource(config.graphql_path.as_str())
        .route(web::post().to(graphql::graphql_handler))
        .route(
            web::get()
                .guard(guard::Header("upgrade", "websocket"))
                .to(graphql::graphql_subscription),
        );

    if config.graphiql_enabled {
        cfg.app_data(web::Data::new(graphql::GraphiqlEndpoint(
            config.graphql_path.clone(),
        )));
        endpoint = endpoint.route(web::get().to(graphql::graphiql));
    }

    cfg.service(endpoint.default_service(web::to(not_found)))
        .service(web::scope("/api").route("/health", web::get().to(health::health_check)))
        .default_service(web::to(not_found));
}

/// Fallback for unknown routes.
pub async fn not_found(req: HttpRequest, request_id: RequestId) -> HttpResponse {
    let error = ErrorResponse::not_found(format!("No route for {} {}", req.method(), req.path()))
        .with_instance(req.path())
        .with_request_id(request_id.as_str());

    HttpResponse::NotFound().json(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::RequestIdMiddleware;
    use crate::state::AppState;
    use actix_web::{App, http::StatusCode, test};
    use pulse_shared::dto::HealthResponse;
    use serde_json::{Value, json};

    macro_rules! app {
        ($config:expr) => {{
            let config: AppConfig = $config;
            let state = AppState::new(&config).unwrap();
            test::init_service(
                App::new()
                    .wrap(RequestIdMiddleware)
                    .app_data(web::Data::new(state.schema.clone()))
                    .app_data(web::Data::new(state))
                    .configure(|cfg| configure_routes(cfg, &config)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_health_reports_counts() {
        let app = app!(AppConfig::default());

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.posts, 4);
        assert_eq!(body.subscribers, 0);
    }

    #[actix_web::test]
    async fn test_post_graphql_query() {
        let app = app!(AppConfig::default());

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": "{ post(id: 2) { id title votes author { firstName } } }" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["data"],
            json!({ "post": {
                "id": 2, "title": "Welcome to Meteor", "votes": 3,
                "author": { "firstName": "Sashko" }
            }})
        );
    }

    #[actix_web::test]
    async fn test_post_graphql_mutation_error() {
        let app = app!(AppConfig::default());

        let req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": "mutation { upvotePost(postId: 999) { id } }" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"], json!({ "upvotePost": null }));
        assert_eq!(body["errors"][0]["message"], "Couldn't find post with id 999");
        assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_graphql_path_is_configurable() {
        let config = AppConfig {
            graphql_path: "/api/graphql".to_string(),
            ..AppConfig::default()
        };
        let app = app!(config);

        let req = test::TestRequest::post()
            .uri("/api/graphql")
            .set_json(json!({ "query": "{ posts { id } }" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["posts"].as_array().map(Vec::len), Some(4));
    }

    #[actix_web::test]
    async fn test_websocket_upgrade_switches_protocols() {
        let app = app!(AppConfig::default());

        let req = test::TestRequest::get()
            .uri("/graphql")
            .insert_header(("Upgrade", "websocket"))
            .insert_header(("Connection", "upgrade"))
            .insert_header(("Sec-WebSocket-Key", "dGhlIHNhbXBsZSBub25jZQ=="))
            .insert_header(("Sec-WebSocket-Version", "13"))
            .insert_header(("Sec-WebSocket-Protocol", "graphql-transport-ws"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SWITCHING_PROTOCOLS);
        assert_eq!(
            res.headers().get("sec-websocket-protocol").unwrap(),
            "graphql-transport-ws"
        );
    }

    #[actix_web::test]
    async fn test_websocket_upgrade_without_graphiql() {
        let config = AppConfig {
            graphiql_enabled: false,
            ..AppConfig::default()
        };
        let app = app!(config);

        let req = test::TestRequest::get()
            .uri("/graphql")
            .insert_header(("Upgrade", "websocket"))
            .insert_header(("Connection", "upgrade"))
            .insert_header(("Sec-WebSocket-Key", "dGhlIHNhbXBsZSBub25jZQ=="))
            .insert_header(("Sec-WebSocket-Version", "13"))
            .insert_header(("Sec-WebSocket-Protocol", "graphql-ws"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SWITCHING_PROTOCOLS);
    }

    #[actix_web::test]
    async fn test_graphiql_served_when_enabled() {
        let app = app!(AppConfig::default());

        let req = test::TestRequest::get().uri("/graphql").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_graphiql_hidden_when_disabled() {
        let config = AppConfig {
            graphiql_enabled: false,
            ..AppConfig::default()
        };
        let app = app!(config);

        let req = test::TestRequest::get().uri("/graphql").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_unknown_route_is_problem_json() {
        let app = app!(AppConfig::default());

        let req = test::TestRequest::get()
            .uri("/nope")
            .insert_header(("X-Request-ID", "req-7"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["instance"], "/nope");
        assert_eq!(body["request_id"], "req-7");
    }
}
