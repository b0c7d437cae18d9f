use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::ApiResponse;
use crate::models::classrooms::requests::ClassroomQueryParams;
use crate::services::common::storage_failure;

pub async fn list_classrooms(
    service: &ClassroomService,
    request: &HttpRequest,
    query: ClassroomQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classrooms(query).await {
        Ok(classrooms) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            classrooms,
            "Classrooms retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing classrooms", e)),
    }
}
