//! Health check endpoint.

use actix_web::{HttpResponse, web};
use quire_shared::ErrorResponse;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns 503 when storage is unreachable.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    if let Err(e) = state.posts.ping().await {
        tracing::error!(error = %e, "Storage ping failed");
        return HttpResponse::ServiceUnavailable()
            .json(ErrorResponse::service_unavailable().with_detail("storage unreachable"));
    }

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
