use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PeriodService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn delete_period(
    service: &PeriodService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_period(id).await {
        Ok(true) => {
            info!("Period {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Period deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::PeriodNotFound, "Period not found")),
        Err(e) => Ok(storage_failure("Period deletion", e)),
    }
}
