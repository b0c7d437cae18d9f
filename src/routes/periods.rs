use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::periods::requests::PeriodRequest;
use crate::models::users::entities::UserRole;
use crate::services::PeriodService;
use crate::utils::SafeIDI64;

// 懒加载的全局 PeriodService 实例
static PERIOD_SERVICE: Lazy<PeriodService> = Lazy::new(PeriodService::new_lazy);

// HTTP处理程序
pub async fn list_periods(req: HttpRequest) -> ActixResult<HttpResponse> {
    PERIOD_SERVICE.list_periods(&req).await
}

pub async fn get_period(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PERIOD_SERVICE.get_period(&req, id.0).await
}

pub async fn create_period(
    req: HttpRequest,
    period_data: web::Json<PeriodRequest>,
) -> ActixResult<HttpResponse> {
    PERIOD_SERVICE.create_period(&req, period_data.into_inner()).await
}

pub async fn update_period(
    req: HttpRequest,
    id: SafeIDI64,
    period_data: web::Json<PeriodRequest>,
) -> ActixResult<HttpResponse> {
    PERIOD_SERVICE
        .update_period(&req, id.0, period_data.into_inner())
        .await
}

pub async fn delete_period(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    PERIOD_SERVICE.delete_period(&req, id.0).await
}

// 配置路由
pub fn configure_periods_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/periods")
            .wrap(middlewares::RequireJWT)
            .service(
                // 登录账号均可查看，管理员可以新增
                web::resource("").route(web::get().to(list_periods)).route(
                    web::post()
                        .to(create_period)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_period))
                    .route(
                        web::put()
                            .to(update_period)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_period)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
