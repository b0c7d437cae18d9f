use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeLevelService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn delete_grade_level(
    service: &GradeLevelService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_grade_level(id).await {
        Ok(true) => {
            info!("Grade level {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Grade level deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::GradeLevelNotFound, "Grade level not found")),
        Err(e) => Ok(storage_failure("Grade level deletion", e)),
    }
}
