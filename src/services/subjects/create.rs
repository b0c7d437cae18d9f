use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::models::ApiResponse;
use crate::models::subjects::requests::SubjectRequest;
use crate::services::common::{storage_failure, validation_failed};
use crate::validation::validate_subject;

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_data: SubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_subject(&subject_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            info!("Subject {} ({}) created", subject.name, subject.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                subject,
                "Subject created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Subject creation", e)),
    }
}
