use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::ApiResponse;
use crate::models::exams::requests::{ExamListQuery, ExamQueryParams};
use crate::services::common::storage_failure;

pub async fn list_exams(
    service: &ExamService,
    request: &HttpRequest,
    query: ExamQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (page, size) = query.pagination().normalized();
    let list_query = ExamListQuery {
        page,
        size,
        classroom_id: query.classroom_id,
        term_id: query.term_id,
        subject_id: query.subject_id,
    };

    match storage.list_exams_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Exam list retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing exams", e)),
    }
}
