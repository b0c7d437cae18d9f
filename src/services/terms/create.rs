use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TermService;
use crate::models::ApiResponse;
use crate::models::terms::requests::TermRequest;
use crate::services::common::{require_reference, storage_failure, validation_failed};
use crate::validation::validate_term;

pub async fn create_term(
    service: &TermService,
    request: &HttpRequest,
    term_data: TermRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    match storage.create_term(term_data).await {
        Ok(term) => {
            info!("Term {} created in academic year {}", term.name, year.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                term,
                "Term created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Term creation", e)),
    }
}
