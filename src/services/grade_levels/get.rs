use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeLevelService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn get_grade_level(
    service: &GradeLevelService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_grade_level(id).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            grade,
            "Grade level retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::GradeLevelNotFound, "Grade level not found")),
        Err(e) => Ok(storage_failure("Fetching grade level", e)),
    }
}
