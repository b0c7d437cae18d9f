use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ExamService, check_exam_references};
use crate::models::exams::requests::ExamRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure, validation_failed};
use crate::validation::validate_exam;

pub async fn update_exam(
    service: &ExamService,
    request: &HttpRequest,
    id: i64,
    exam_data: ExamRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_exam(&exam_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = check_exam_references(&storage, &exam_data).await {
        return Ok(resp);
    }

    match storage.update_exam(id, exam_data).await {
        Ok(Some(exam)) => {
            info!("Exam {} updated", exam.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                exam,
                "Exam updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::ExamNotFound, "Exam not found")),
        Err(e) => Ok(storage_failure("Exam update", e)),
    }
}
