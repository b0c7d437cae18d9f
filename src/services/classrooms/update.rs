use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ClassroomService, check_classroom_references};
use crate::models::classrooms::requests::ClassroomRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure, validation_failed};
use crate::validation::validate_classroom;

pub async fn update_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    id: i64,
    classroom_data: ClassroomRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_classroom(&classroom_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = check_classroom_references(&storage, &classroom_data).await {
        return Ok(resp);
    }

    match storage.update_classroom(id, classroom_data).await {
        Ok(Some(classroom)) => {
            info!("Classroom {} updated", classroom.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                classroom,
                "Classroom updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::ClassroomNotFound, "Classroom not found")),
        Err(e) => Ok(storage_failure("Classroom update", e)),
    }
}
