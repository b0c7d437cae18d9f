use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::models::ApiResponse;
use crate::models::notifications::requests::{NotificationListQuery, NotificationQueryParams};
use crate::services::common::storage_failure;

pub async fn list_notifications(
    service: &NotificationService,
    request: &HttpRequest,
    query: NotificationQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (page, size) = query.pagination().normalized();
    let list_query = NotificationListQuery {
        page,
        size,
        audience: query.audience,
        published: query.published,
    };

    match storage.list_notifications_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Notification list retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing notifications", e)),
    }
}
