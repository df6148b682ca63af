//! # Pulse API Server
//!
//! Serves the posts GraphQL API over actix-web: queries and the upvote
//! mutation over HTTP, the `postUpvoted` subscription over WebSocket.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod graphql;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        host = %config.host,
        port = config.port,
        graphql_path = %config.graphql_path,
        graphiql = config.graphiql_enabled,
        "Starting Pulse API Server"
    );

    let state = AppState::new(&config).map_err(|e| {
        tracing::error!(error = %e, "Failed to load dataset");
        std::io::Error::other(e)
    })?;

    let routes = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.schema.clone()))
            .app_data(web::Data::new(state.clone()))
            .configure(|cfg| handlers::configure_routes(cfg, &routes))
    })
    .bind((config.host.as_str(), config.port))?;

    tracing::info!("Server ready at {}", config.graphql_url());

    server.run().await?;

    tracing::info!("Shutting down the server");
    Ok(())
}
