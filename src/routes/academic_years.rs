use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::academic_years::requests::AcademicYearRequest;
use crate::models::users::entities::UserRole;
use crate::services::AcademicYearService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AcademicYearService 实例
static ACADEMIC_YEAR_SERVICE: Lazy<AcademicYearService> = Lazy::new(AcademicYearService::new_lazy);

// HTTP处理程序
pub async fn list_academic_years(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE.list_academic_years(&req).await
}

pub async fn get_academic_year(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE.get_academic_year(&req, id.0).await
}

pub async fn create_academic_year(
    req: HttpRequest,
    year_data: web::Json<AcademicYearRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE.create_academic_year(&req, year_data.into_inner()).await
}

pub async fn update_academic_year(
    req: HttpRequest,
    id: SafeIDI64,
    year_data: web::Json<AcademicYearRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE
        .update_academic_year(&req, id.0, year_data.into_inner())
        .await
}

pub async fn delete_academic_year(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACADEMIC_YEAR_SERVICE.delete_academic_year(&req, id.0).await
}

// 配置路由
pub fn configure_academic_years_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/academic-years")
            .wrap(middlewares::RequireJWT)
            .service(
                // 登录账号均可查看，管理员可以新增
                web::resource("").route(web::get().to(list_academic_years)).route(
                    web::post()
                        .to(create_academic_year)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_academic_year))
                    .route(
                        web::put()
                            .to(update_academic_year)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_academic_year)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
