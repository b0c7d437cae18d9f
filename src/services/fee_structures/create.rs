use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{FeeStructureService, check_fee_references};
use crate::models::ApiResponse;
use crate::models::fee_structures::requests::FeeStructureRequest;
use crate::services::common::{storage_failure, validation_failed};
use crate::validation::validate_fee_structure;

pub async fn create_fee_structure(
    service: &FeeStructureService,
    request: &HttpRequest,
    fee_data: FeeStructureRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_fee_structure(&fee_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = check_fee_references(&storage, &fee_data).await {
        return Ok(resp);
    }

    match storage.create_fee_structure(fee_data).await {
        Ok(fee) => {
            info!(
                "Fee structure {} created, total {:.2} due {}",
                fee.name, fee.total_amount, fee.due_date
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                fee,
                "Fee structure created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Fee structure creation", e)),
    }
}
