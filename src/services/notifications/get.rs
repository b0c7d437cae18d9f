use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn get_notification(
    service: &NotificationService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_notification(id).await {
        Ok(Some(notification)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            notification,
            "Notification retrieved successfully",
        ))),
        Ok(None) => Ok(not_found(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        )),
        Err(e) => Ok(storage_failure("Fetching notification", e)),
    }
}
