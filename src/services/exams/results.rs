use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ExamService;
use crate::models::exam_results::requests::ExamResultRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure, validation_failed};
use crate::validation::validate_exam_result;

pub async fn list_results(
    service: &ExamService,
    request: &HttpRequest,
    exam_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_exam(exam_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::ExamNotFound, "Exam not found")),
        Err(e) => return Ok(storage_failure("Fetching exam", e)),
    }

    match storage.list_exam_results(exam_id).await {
        Ok(results) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            results,
            "Exam results retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing exam results", e)),
    }
}

pub async fn record_result(
    service: &ExamService,
    request: &HttpRequest,
    exam_id: i64,
    result_data: ExamResultRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 分数上限取决于考试总分
    let exam = match storage.get_exam(exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => return Ok(not_found(ErrorCode::ExamNotFound, "Exam not found")),
        Err(e) => return Ok(storage_failure("Fetching exam", e)),
    };

    if let Err(errors) = validate_exam_result(&result_data, &exam) {
        return Ok(validation_failed(errors));
    }

    match storage.upsert_exam_result(exam_id, result_data).await {
        Ok(result) => {
            info!(
                "Result for student {} recorded on exam {} ({}/{})",
                result.student_number, exam.id, result.marks_obtained, exam.total_marks
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                result,
                "Exam result recorded successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Recording exam result", e)),
    }
}
