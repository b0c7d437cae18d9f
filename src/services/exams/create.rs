use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ExamService, check_exam_references};
use crate::models::ApiResponse;
use crate::models::exams::requests::ExamRequest;
use crate::services::common::{storage_failure, validation_failed};
use crate::validation::validate_exam;

pub async fn create_exam(
    service: &ExamService,
    request: &HttpRequest,
    exam_data: ExamRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_exam(&exam_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = check_exam_references(&storage, &exam_data).await {
        return Ok(resp);
    }

    match storage.create_exam(exam_data).await {
        Ok(exam) => {
            info!(
                "Exam {} ({}) scheduled on {}",
                exam.name, exam.exam_type, exam.exam_date
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                exam,
                "Exam created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Exam creation", e)),
    }
}
