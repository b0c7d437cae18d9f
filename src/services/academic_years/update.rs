use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::AcademicYearService;
use crate::models::academic_years::requests::AcademicYearRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure, validation_failed};
use crate::validation::{validate_academic_year, validate_year_covers_terms};

pub async fn update_academic_year(
    service: &AcademicYearService,
    request: &HttpRequest,
    id: i64,
    year_data: AcademicYearRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_academic_year(&year_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    // 新的起止日期不能把已有学期排除在外
    let terms = match storage.list_terms(Some(id)).await {
        Ok(terms) => terms,
        Err(e) => return Ok(storage_failure("Listing terms", e)),
    };
    if let Err(errors) = validate_year_covers_terms(&year_data, &terms) {
        warn!(
            "Rejected academic year {} dates {}..{}: {}",
            id,
            year_data.start_date,
            year_data.end_date,
            errors.summary()
        );
        return Ok(validation_failed(errors));
    }

    match storage.update_academic_year(id, year_data).await {
        Ok(Some(year)) => {
            info!("Academic year {} updated", year.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                year,
                "Academic year updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::AcademicYearNotFound,
            "Academic year not found",
        )),
        Err(e) => Ok(storage_failure("Academic year update", e)),
    }
}
