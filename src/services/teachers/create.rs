use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::ApiResponse;
use crate::models::teachers::requests::TeacherRequest;
use crate::services::common::{storage_failure, validation_failed};
use crate::validation::validate_teacher;

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: TeacherRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_teacher(&teacher_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    // 工号重复由唯一索引拦截，返回 409
    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => {
            info!(
                "Teacher {} ({}) created",
                teacher.full_name(),
                teacher.staff_number
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                teacher,
                "Teacher created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Teacher creation", e)),
    }
}
