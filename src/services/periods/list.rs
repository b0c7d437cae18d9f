use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PeriodService;
use crate::models::ApiResponse;
use crate::services::common::storage_failure;

pub async fn list_periods(
    service: &PeriodService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_periods().await {
        Ok(periods) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            periods,
            "Periods retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing periods", e)),
    }
}
