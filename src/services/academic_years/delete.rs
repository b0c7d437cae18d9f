use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AcademicYearService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn delete_academic_year(
    service: &AcademicYearService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_academic_year(id).await {
        Ok(true) => {
            info!("Academic year {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Academic year deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::AcademicYearNotFound,
            "Academic year not found",
        )),
        Err(e) => Ok(storage_failure("Academic year deletion", e)),
    }
}
