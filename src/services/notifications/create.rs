use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NotificationService;
use crate::middlewares::RequireJWT;
use crate::models::notifications::requests::NotificationRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{storage_failure, validation_failed};
use crate::validation::validate_notification;

pub async fn create_notification(
    service: &NotificationService,
    request: &HttpRequest,
    notification_data: NotificationRequest,
) -> ActixResult<HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    if let Err(errors) = validate_notification(&notification_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    match storage
        .create_notification(notification_data, Some(uid))
        .await
    {
        Ok(notification) => {
            info!(
                "Notification {} created by {} for {} (published: {})",
                notification.id, uid, notification.audience, notification.published
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                notification,
                "Notification created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Notification creation", e)),
    }
}
