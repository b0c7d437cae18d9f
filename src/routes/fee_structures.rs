use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::fee_structures::requests::{FeeStructureQueryParams, FeeStructureRequest};
use crate::models::users::entities::UserRole;
use crate::services::FeeStructureService;
use crate::utils::SafeIDI64;

// 懒加载的全局 FeeStructureService 实例
static FEE_STRUCTURE_SERVICE: Lazy<FeeStructureService> = Lazy::new(FeeStructureService::new_lazy);

// HTTP处理程序
pub async fn list_fee_structures(
    req: HttpRequest,
    query: web::Query<FeeStructureQueryParams>,
) -> ActixResult<HttpResponse> {
    FEE_STRUCTURE_SERVICE.list_fee_structures(&req, query.into_inner()).await
}

pub async fn get_fee_structure(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_STRUCTURE_SERVICE.get_fee_structure(&req, id.0).await
}

pub async fn create_fee_structure(
    req: HttpRequest,
    fee_data: web::Json<FeeStructureRequest>,
) -> ActixResult<HttpResponse> {
    FEE_STRUCTURE_SERVICE.create_fee_structure(&req, fee_data.into_inner()).await
}

pub async fn update_fee_structure(
    req: HttpRequest,
    id: SafeIDI64,
    fee_data: web::Json<FeeStructureRequest>,
) -> ActixResult<HttpResponse> {
    FEE_STRUCTURE_SERVICE
        .update_fee_structure(&req, id.0, fee_data.into_inner())
        .await
}

pub async fn delete_fee_structure(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_STRUCTURE_SERVICE.delete_fee_structure(&req, id.0).await
}

// 配置路由
pub fn configure_fee_structures_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fee-structures")
            .wrap(middlewares::RequireJWT)
            .service(
                // 登录账号均可查看，管理员可以新增
                web::resource("").route(web::get().to(list_fee_structures)).route(
                    web::post()
                        .to(create_fee_structure)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_fee_structure))
                    .route(
                        web::put()
                            .to(update_fee_structure)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_fee_structure)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
