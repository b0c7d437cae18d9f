use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeLevelService;
use crate::models::ApiResponse;
use crate::models::grade_levels::requests::GradeLevelRequest;
use crate::services::common::{storage_failure, validation_failed};
use crate::validation::validate_grade_level;

pub async fn create_grade_level(
    service: &GradeLevelService,
    request: &HttpRequest,
    grade_data: GradeLevelRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_grade_level(&grade_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    match storage.create_grade_level(grade_data).await {
        Ok(grade) => {
            info!("Grade level {} (level {}) created", grade.name, grade.level);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                grade,
                "Grade level created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Grade level creation", e)),
    }
}
