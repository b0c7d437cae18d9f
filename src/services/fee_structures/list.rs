use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeStructureService;
use crate::models::ApiResponse;
use crate::models::fee_structures::requests::{FeeStructureListQuery, FeeStructureQueryParams};
use crate::services::common::storage_failure;

pub async fn list_fee_structures(
    service: &FeeStructureService,
    request: &HttpRequest,
    query: FeeStructureQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (page, size) = query.pagination().normalized();
    let list_query = FeeStructureListQuery {
        page,
        size,
        academic_year_id: query.academic_year_id,
        classroom_id: query.classroom_id,
    };

    match storage.list_fee_structures_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Fee structure list retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing fee structures", e)),
    }
}
