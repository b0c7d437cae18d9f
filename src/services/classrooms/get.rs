use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn get_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_classroom(id).await {
        Ok(Some(classroom)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            classroom,
            "Classroom retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e) => Ok(storage_failure("Fetching classroom", e)),
    }
}
