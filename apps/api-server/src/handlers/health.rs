//! Health check endpoint.

use actix_web::{HttpResponse, web};
use pulse_shared::dto::HealthResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Health check endpoint - returns server status plus dataset and
/// subscription counters.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.service.list_posts().await?.len();

    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        posts,
        subscribers: state.service.subscriber_count(),
    };

    Ok(HttpResponse::Ok().json(response))
}
