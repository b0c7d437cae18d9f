use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PeriodService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn get_period(
    service: &PeriodService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_period(id).await {
        Ok(Some(period)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            period,
            "Period retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::PeriodNotFound, "Period not found")),
        Err(e) => Ok(storage_failure("Fetching period", e)),
    }
}
