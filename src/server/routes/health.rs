//! Health check endpoint

use crate::server::routes::{ApiResponse, method_not_allowed};
use crate::server::state::AppState;
use crate::storage::StorageHealthStatus;
use actix_web::{HttpResponse, web};
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Health report
#[derive(Debug, Clone, serde::Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
    pub storage: StorageHealthStatus,
}

/// Liveness plus a storage probe.
///
/// Returns 503 when storage is unavailable so load balancers can pull the
/// instance.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let storage = StorageHealthStatus::probe(state.repository.as_ref()).await;
    let healthy = storage.overall;
    let report = HealthStatus {
        status: Cow::Borrowed(if healthy { "healthy" } else { "degraded" }),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        storage,
    };

    if healthy {
        HttpResponse::Ok().json(ApiResponse::success("Service is healthy", report))
    } else {
        HttpResponse::ServiceUnavailable().json(ApiResponse {
            success: false,
            message: "Storage is unavailable".to_string(),
            data: Some(report),
        })
    }
}
