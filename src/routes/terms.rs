use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::terms::requests::{TermQueryParams, TermRequest};
use crate::models::users::entities::UserRole;
use crate::services::TermService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TermService 实例
static TERM_SERVICE: Lazy<TermService> = Lazy::new(TermService::new_lazy);

// HTTP处理程序
pub async fn list_terms(
    req: HttpRequest,
    query: web::Query<TermQueryParams>,
) -> ActixResult<HttpResponse> {
    TERM_SERVICE.list_terms(&req, query.into_inner()).await
}

pub async fn get_term(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TERM_SERVICE.get_term(&req, id.0).await
}

pub async fn create_term(
    req: HttpRequest,
    term_data: web::Json<TermRequest>,
) -> ActixResult<HttpResponse> {
    TERM_SERVICE.create_term(&req, term_data.into_inner()).await
}

pub async fn update_term(
    req: HttpRequest,
    id: SafeIDI64,
    term_data: web::Json<TermRequest>,
) -> ActixResult<HttpResponse> {
    TERM_SERVICE
        .update_term(&req, id.0, term_data.into_inner())
        .await
}

pub async fn delete_term(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    TERM_SERVICE.delete_term(&req, id.0).await
}

// 配置路由
pub fn configure_terms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/terms")
            .wrap(middlewares::RequireJWT)
            .service(
                // 登录账号均可查看，管理员可以新增
                web::resource("").route(web::get().to(list_terms)).route(
                    web::post()
                        .to(create_term)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_term))
                    .route(
                        web::put()
                            .to(update_term)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_term)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
