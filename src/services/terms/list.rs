use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TermService;
use crate::models::ApiResponse;
use crate::models::terms::requests::TermQueryParams;
use crate::services::common::storage_failure;

pub async fn list_terms(
    service: &TermService,
    request: &HttpRequest,
    query: TermQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_terms(query.academic_year_id).await {
        Ok(terms) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            terms,
            "Terms retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing terms", e)),
    }
}
