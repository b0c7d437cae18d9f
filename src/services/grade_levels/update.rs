use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeLevelService;
use crate::models::grade_levels::requests::GradeLevelRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure, validation_failed};
use crate::validation::validate_grade_level;

pub async fn update_grade_level(
    service: &GradeLevelService,
    request: &HttpRequest,
    id: i64,
    grade_data: GradeLevelRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_grade_level(&grade_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    match storage.update_grade_level(id, grade_data).await {
        Ok(Some(grade)) => {
            info!("Grade level {} updated", grade.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                grade,
                "Grade level updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::GradeLevelNotFound, "Grade level not found")),
        Err(e) => Ok(storage_failure("Grade level update", e)),
    }
}
