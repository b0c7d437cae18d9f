use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NotificationService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure};

pub async fn delete_notification(
    service: &NotificationService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_notification(id).await {
        Ok(true) => {
            info!("Notification {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Notification deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        )),
        Err(e) => Ok(storage_failure("Notification deletion", e)),
    }
}
