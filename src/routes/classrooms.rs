use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classrooms::requests::{ClassroomQueryParams, ClassroomRequest};
use crate::models::users::entities::UserRole;
use crate::services::ClassroomService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ClassroomService 实例
static CLASSROOM_SERVICE: Lazy<ClassroomService> = Lazy::new(ClassroomService::new_lazy);

// HTTP处理程序
pub async fn list_classrooms(
    req: HttpRequest,
    query: web::Query<ClassroomQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.list_classrooms(&req, query.into_inner()).await
}

pub async fn get_classroom(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.get_classroom(&req, id.0).await
}

pub async fn create_classroom(
    req: HttpRequest,
    classroom_data: web::Json<ClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.create_classroom(&req, classroom_data.into_inner()).await
}

pub async fn update_classroom(
    req: HttpRequest,
    id: SafeIDI64,
    classroom_data: web::Json<ClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .update_classroom(&req, id.0, classroom_data.into_inner())
        .await
}

pub async fn delete_classroom(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.delete_classroom(&req, id.0).await
}

// 配置路由
pub fn configure_classrooms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classrooms")
            .wrap(middlewares::RequireJWT)
            .service(
                // 登录账号均可查看，管理员可以新增
                web::resource("").route(web::get().to(list_classrooms)).route(
                    web::post()
                        .to(create_classroom)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_classroom))
                    .route(
                        web::put()
                            .to(update_classroom)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_classroom)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
