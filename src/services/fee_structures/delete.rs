use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeeStructureService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn delete_fee_structure(
    service: &FeeStructureService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_fee_structure(id).await {
        Ok(true) => {
            info!("Fee structure {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Fee structure deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::FeeStructureNotFound,
            "Fee structure not found",
        )),
        Err(e) => Ok(storage_failure("Fee structure deletion", e)),
    }
}
