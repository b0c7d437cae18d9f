use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TermService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn delete_term(
    service: &TermService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_term(id).await {
        Ok(true) => {
            info!("Term {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Term deleted successfully")))
        }
        Ok(false) => Ok(not_found(ErrorCode::TermNotFound, "Term not found")),
        Err(e) => Ok(storage_failure("Term deletion", e)),
    }
}
