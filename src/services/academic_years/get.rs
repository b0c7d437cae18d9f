use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AcademicYearService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn get_academic_year(
    service: &AcademicYearService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_academic_year(id).await {
        Ok(Some(year)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            year,
            "Academic year retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::AcademicYearNotFound,
            "Academic year not found",
        )),
        Err(e) => Ok(storage_failure("Fetching academic year", e)),
    }
}
