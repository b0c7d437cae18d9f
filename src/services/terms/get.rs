use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TermService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn get_term(
    service: &TermService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_term(id).await {
        Ok(Some(term)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            term,
            "Term retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::TermNotFound, "Term not found")),
        Err(e) => Ok(storage_failure("Fetching term", e)),
    }
}
