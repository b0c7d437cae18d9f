use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::warn;

use super::SystemService;
use crate::models::system::responses::HealthResponse;
use crate::models::{ApiResponse, AppStartTime, ErrorCode};

pub async fn health(service: &SystemService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let storage = service.get_storage(request);

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| (chrono::Utc::now() - start.start_datetime).num_seconds())
        .unwrap_or_default();

    let database_ok = match storage.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Health check database ping failed: {}", e);
            false
        }
    };

    let response = HealthResponse {
        system_name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_seconds,
        database_ok,
    };

    if database_ok {
        Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Service is healthy")))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(ApiResponse::error(
            ErrorCode::InternalServerError,
            response,
            "Database is unreachable",
        )))
    }
}
