use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::notifications::requests::{NotificationQueryParams, NotificationRequest};
use crate::models::users::entities::UserRole;
use crate::services::NotificationService;
use crate::utils::SafeIDI64;

// 懒加载的全局 NotificationService 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> = Lazy::new(NotificationService::new_lazy);

// HTTP处理程序
pub async fn list_notifications(
    req: HttpRequest,
    query: web::Query<NotificationQueryParams>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.list_notifications(&req, query.into_inner()).await
}

pub async fn get_notification(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.get_notification(&req, id.0).await
}

pub async fn create_notification(
    req: HttpRequest,
    notification_data: web::Json<NotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.create_notification(&req, notification_data.into_inner()).await
}

pub async fn update_notification(
    req: HttpRequest,
    id: SafeIDI64,
    notification_data: web::Json<NotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .update_notification(&req, id.0, notification_data.into_inner())
        .await
}

pub async fn delete_notification(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.delete_notification(&req, id.0).await
}

// 配置路由
pub fn configure_notifications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .wrap(middlewares::RequireJWT)
            .service(
                // 登录账号均可查看，教务人员与管理员可以新增
                web::resource("").route(web::get().to(list_notifications)).route(
                    web::post()
                        .to(create_notification)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_notification))
                    .route(
                        web::put()
                            .to(update_notification)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_notification)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
