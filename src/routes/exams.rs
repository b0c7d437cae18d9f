use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::exam_results::requests::ExamResultRequest;
use crate::models::exams::requests::{ExamQueryParams, ExamRequest};
use crate::models::users::entities::UserRole;
use crate::services::ExamService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ExamService 实例
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

// HTTP处理程序
pub async fn list_exams(
    req: HttpRequest,
    query: web::Query<ExamQueryParams>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(&req, query.into_inner()).await
}

pub async fn get_exam(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.get_exam(&req, id.0).await
}

pub async fn create_exam(
    req: HttpRequest,
    exam_data: web::Json<ExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(&req, exam_data.into_inner()).await
}

pub async fn update_exam(
    req: HttpRequest,
    id: SafeIDI64,
    exam_data: web::Json<ExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_exam(&req, id.0, exam_data.into_inner())
        .await
}

pub async fn delete_exam(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(&req, id.0).await
}

pub async fn list_results(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_results(&req, id.0).await
}

pub async fn record_result(
    req: HttpRequest,
    id: SafeIDI64,
    result_data: web::Json<ExamResultRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .record_result(&req, id.0, result_data.into_inner())
        .await
}

// 配置路由
pub fn configure_exams_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_exams))
                    .route(
                        web::post()
                            .to(create_exam)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_exam))
                    .route(
                        web::put()
                            .to(update_exam)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_exam)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                // 成绩由教务人员录入
                web::resource("/{id}/results")
                    .route(web::get().to(list_results))
                    .route(
                        web::post()
                            .to(record_result)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
