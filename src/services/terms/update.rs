use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TermService;
use crate::models::terms::requests::TermRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    not_found, require_reference, storage_failure, validation_failed,
};
use crate::validation::validate_term;

pub async fn update_term(
    service: &TermService,
    request: &HttpRequest,
    id: i64,
    term_data: TermRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_term(id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(not_found(ErrorCode::TermNotFound, "Term not found")),
        Err(e) => return Ok(storage_failure("Fetching term", e)),
    }

    // 学年可能随表单一起修改，按新学年校验日期范围
    let year = match require_reference(
        storage.get_academic_year(term_data.academic_year_id),
        "academic_year_id",
        "Academic year",
    )
    .await
    {
        Ok(year) => year,
        Err(resp) => return Ok(resp),
    };

    if let Err(errors) = validate_term(&term_data, &year) {
        return Ok(validation_failed(errors));
    }

    match storage.update_term(id, term_data).await {
        Ok(Some(term)) => {
            info!("Term {} updated", term.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                term,
                "Term updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::TermNotFound, "Term not found")),
        Err(e) => Ok(storage_failure("Term update", e)),
    }
}
