use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ClassroomService, check_classroom_references};
use crate::models::ApiResponse;
use crate::models::classrooms::requests::ClassroomRequest;
use crate::services::common::{storage_failure, validation_failed};
use crate::validation::validate_classroom;

pub async fn create_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    classroom_data: ClassroomRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_classroom(&classroom_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = check_classroom_references(&storage, &classroom_data).await {
        return Ok(resp);
    }

    match storage.create_classroom(classroom_data).await {
        Ok(classroom) => {
            info!(
                "Classroom {} created for academic year {}",
                classroom.name, classroom.academic_year_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                classroom,
                "Classroom created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Classroom creation", e)),
    }
}
