use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::teachers::requests::TeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure, validation_failed};
use crate::validation::validate_teacher;

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    id: i64,
    teacher_data: TeacherRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_teacher(&teacher_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    match storage.update_teacher(id, teacher_data).await {
        Ok(Some(teacher)) => {
            info!("Teacher {} updated", teacher.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                teacher,
                "Teacher updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::TeacherNotFound, "Teacher not found")),
        Err(e) => Ok(storage_failure("Teacher update", e)),
    }
}
