use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PeriodService;
use crate::models::periods::requests::PeriodRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure, validation_failed};
use crate::validation::validate_period;

pub async fn update_period(
    service: &PeriodService,
    request: &HttpRequest,
    id: i64,
    period_data: PeriodRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let _guard = service.lock_writes().await;

    let existing = match storage.list_periods().await {
        Ok(periods) => periods,
        Err(e) => return Ok(storage_failure("Listing periods", e)),
    };

    if !existing.iter().any(|p| p.id == id) {
        return Ok(not_found(ErrorCode::PeriodNotFound, "Period not found"));
    }

    if let Err(errors) = validate_period(&period_data, &existing, Some(id)) {
        return Ok(validation_failed(errors));
    }

    match storage.update_period(id, period_data).await {
        Ok(Some(period)) => {
            info!("Period {} updated", period.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                period,
                "Period updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::PeriodNotFound, "Period not found")),
        Err(e) => Ok(storage_failure("Period update", e)),
    }
}
