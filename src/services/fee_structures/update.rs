use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{FeeStructureService, check_fee_references};
use crate::models::fee_structures::requests::FeeStructureRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure, validation_failed};
use crate::validation::validate_fee_structure;

pub async fn update_fee_structure(
    service: &FeeStructureService,
    request: &HttpRequest,
    id: i64,
    fee_data: FeeStructureRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_fee_structure(&fee_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = check_fee_references(&storage, &fee_data).await {
        return Ok(resp);
    }

    match storage.update_fee_structure(id, fee_data).await {
        Ok(Some(fee)) => {
            info!("Fee structure {} updated, total {:.2}", fee.id, fee.total_amount);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                fee,
                "Fee structure updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::FeeStructureNotFound,
            "Fee structure not found",
        )),
        Err(e) => Ok(storage_failure("Fee structure update", e)),
    }
}
