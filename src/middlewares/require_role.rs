/*!
 * 角色校验中间件
 *
 * 挂在 RequireJWT 之后，按资源限制可写入的角色：
 * 基础数据（学年、学期、课时、年级、科目、班级、教师、收费、考试）只允许管理员修改，
 * 考勤、成绩与通知允许教务人员和管理员修改。
 *
 * ```rust,ignore
 * web::resource("")
 *     .route(web::get().to(list_periods))
 *     .route(
 *         web::post()
 *             .to(create_period)
 *             .wrap(RequireRole::new_any(UserRole::admin_roles())),
 *     )
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::{
    ErrorCode,
    users::entities::{User, UserRole},
};

use super::create_error_response;

#[derive(Clone, Copy)]
pub struct RequireRole {
    allowed: &'static [&'static UserRole],
}

impl RequireRole {
    /// 账号角色在列表中即可通过
    pub fn new_any(allowed: &'static [&'static UserRole]) -> Self {
        Self { allowed }
    }

    pub fn permits(&self, role: &UserRole) -> bool {
        self.allowed.iter().any(|r| *r == role)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            rule: *self,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    rule: RequireRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let rule = self.rule;

        Box::pin(async move {
            // RequireJWT 校验通过后会把账号放进请求扩展
            let account = req
                .extensions()
                .get::<User>()
                .map(|u| (u.id, u.username.clone(), u.role.clone()));

            let Some((user_id, username, role)) = account else {
                info!("Role check reached without an authenticated account");
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    )
                    .map_into_right_body(),
                ));
            };

            if !rule.permits(&role) {
                info!(
                    "{} {} denied for {} (id {}, role {})",
                    req.method(),
                    req.path(),
                    username,
                    user_id,
                    role
                );
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::Forbidden,
                        "Your role is not allowed to modify this resource",
                    )
                    .map_into_right_body(),
                ));
            }

            Ok(srv.call(req).await?.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_only_rule() {
        let rule = RequireRole::new_any(UserRole::admin_roles());
        assert!(rule.permits(&UserRole::Admin));
        assert!(!rule.permits(&UserRole::Staff));
    }

    #[test]
    fn test_staff_rule_includes_admin() {
        let rule = RequireRole::new_any(UserRole::staff_roles());
        assert!(rule.permits(&UserRole::Admin));
        assert!(rule.permits(&UserRole::Staff));
    }
}
