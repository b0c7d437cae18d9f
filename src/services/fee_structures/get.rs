use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeStructureService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn get_fee_structure(
    service: &FeeStructureService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_fee_structure(id).await {
        Ok(Some(fee)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            fee,
            "Fee structure retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::FeeStructureNotFound,
            "Fee structure not found",
        )),
        Err(e) => Ok(storage_failure("Fetching fee structure", e)),
    }
}
