use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NotificationService;
use crate::models::notifications::requests::NotificationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{not_found, storage_failure, validation_failed};
use crate::validation::validate_notification;

pub async fn update_notification(
    service: &NotificationService,
    request: &HttpRequest,
    id: i64,
    notification_data: NotificationRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_notification(&notification_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    match storage.update_notification(id, notification_data).await {
        Ok(Some(notification)) => {
            info!("Notification {} updated", notification.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                notification,
                "Notification updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        )),
        Err(e) => Ok(storage_failure("Notification update", e)),
    }
}
