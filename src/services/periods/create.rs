use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::PeriodService;
use crate::models::ApiResponse;
use crate::models::periods::requests::PeriodRequest;
use crate::services::common::{storage_failure, validation_failed};
use crate::validation::validate_period;

pub async fn create_period(
    service: &PeriodService,
    request: &HttpRequest,
    period_data: PeriodRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let _guard = service.lock_writes().await;

    let existing = match storage.list_periods().await {
        Ok(periods) => periods,
        Err(e) => return Ok(storage_failure("Listing periods", e)),
    };

    if let Err(errors) = validate_period(&period_data, &existing, None) {
        warn!(
            "Rejected period {} ({}-{}): {}",
            period_data.name,
            period_data.start_time,
            period_data.end_time,
            errors.summary()
        );
        return Ok(validation_failed(errors));
    }

    match storage.create_period(period_data).await {
        Ok(period) => {
            info!(
                "Period {} created ({}-{})",
                period.name, period.start_time, period.end_time
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                period,
                "Period created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Period creation", e)),
    }
}
