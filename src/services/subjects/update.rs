use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::models::subjects::requests::SubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure, validation_failed};
use crate::validation::validate_subject;

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    id: i64,
    subject_data: SubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_subject(&subject_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    match storage.update_subject(id, subject_data).await {
        Ok(Some(subject)) => {
            info!("Subject {} updated", subject.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                subject,
                "Subject updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::SubjectNotFound, "Subject not found")),
        Err(e) => Ok(storage_failure("Subject update", e)),
    }
}
