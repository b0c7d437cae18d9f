use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AcademicYearService;
use crate::models::ApiResponse;
use crate::services::common::storage_failure;

pub async fn list_academic_years(
    service: &AcademicYearService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_academic_years().await {
        Ok(years) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            years,
            "Academic years retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing academic years", e)),
    }
}
