use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::ApiResponse;
use crate::models::teachers::requests::{TeacherListQuery, TeacherQueryParams};
use crate::services::common::storage_failure;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    query: TeacherQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (page, size) = query.pagination().normalized();
    let list_query = TeacherListQuery {
        page,
        size,
        search: query
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
    };

    match storage.list_teachers_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Teacher list retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing teachers", e)),
    }
}
