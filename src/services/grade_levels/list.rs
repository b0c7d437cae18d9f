use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeLevelService;
use crate::models::ApiResponse;
use crate::services::common::storage_failure;

pub async fn list_grade_levels(
    service: &GradeLevelService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grade_levels().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            items,
            "Grade levels retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing grade levels", e)),
    }
}
