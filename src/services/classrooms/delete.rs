use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassroomService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn delete_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_classroom(id).await {
        Ok(true) => {
            info!("Classroom {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Classroom deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e) => Ok(storage_failure("Classroom deletion", e)),
    }
}
