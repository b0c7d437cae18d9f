use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grade_levels::requests::GradeLevelRequest;
use crate::models::users::entities::UserRole;
use crate::services::GradeLevelService;
use crate::utils::SafeIDI64;

// 懒加载的全局 GradeLevelService 实例
static GRADE_LEVEL_SERVICE: Lazy<GradeLevelService> = Lazy::new(GradeLevelService::new_lazy);

// HTTP处理程序
pub async fn list_grade_levels(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADE_LEVEL_SERVICE.list_grade_levels(&req).await
}

pub async fn get_grade_level(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_LEVEL_SERVICE.get_grade_level(&req, id.0).await
}

pub async fn create_grade_level(
    req: HttpRequest,
    grade_data: web::Json<GradeLevelRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_LEVEL_SERVICE.create_grade_level(&req, grade_data.into_inner()).await
}

pub async fn update_grade_level(
    req: HttpRequest,
    id: SafeIDI64,
    grade_data: web::Json<GradeLevelRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_LEVEL_SERVICE
        .update_grade_level(&req, id.0, grade_data.into_inner())
        .await
}

pub async fn delete_grade_level(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_LEVEL_SERVICE.delete_grade_level(&req, id.0).await
}

// 配置路由
pub fn configure_grade_levels_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grade-levels")
            .wrap(middlewares::RequireJWT)
            .service(
                // 登录账号均可查看，管理员可以新增
                web::resource("").route(web::get().to(list_grade_levels)).route(
                    web::post()
                        .to(create_grade_level)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_grade_level))
                    .route(
                        web::put()
                            .to(update_grade_level)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_grade_level)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
