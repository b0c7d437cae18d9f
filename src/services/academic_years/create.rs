use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AcademicYearService;
use crate::models::ApiResponse;
use crate::models::academic_years::requests::AcademicYearRequest;
use crate::services::common::{storage_failure, validation_failed};
use crate::validation::validate_academic_year;

pub async fn create_academic_year(
    service: &AcademicYearService,
    request: &HttpRequest,
    year_data: AcademicYearRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_academic_year(&year_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    match storage.create_academic_year(year_data).await {
        Ok(year) => {
            info!(
                "Academic year {} created (current: {})",
                year.name, year.is_current
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                year,
                "Academic year created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Academic year creation", e)),
    }
}
