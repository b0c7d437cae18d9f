/*!
 * 登录令牌校验中间件
 *
 * 读取 `Authorization: Bearer <token>`，校验签名与有效期后从存储中取回账号，
 * 放入请求扩展供 [`RequireRole`](super::RequireRole) 与处理函数使用。
 * 令牌签发后账号被删除或角色被修改时，旧令牌一律返回 401，客户端需重新登录。
 *
 * ```rust,ignore
 * web::scope("/api/v1/periods")
 *     .wrap(RequireJWT)
 *     .configure(period_routes)
 * ```
 *
 * 令牌密钥来自 `jwt.secret`，可用环境变量 `JWT_SECRET` 覆盖。
 */

use crate::models::ErrorCode;
use crate::models::users::entities;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info, warn};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

/// 令牌校验失败的原因，只用于日志与响应消息
#[derive(Debug, PartialEq)]
enum Rejection {
    MissingHeader,
    InvalidToken,
    AccountMissing,
    RoleChanged,
    StorageUnavailable,
}

impl Rejection {
    fn message(&self) -> &'static str {
        match self {
            Rejection::MissingHeader => "Missing or invalid Authorization header",
            Rejection::InvalidToken => "Invalid or expired token",
            Rejection::AccountMissing => "Account no longer exists",
            Rejection::RoleChanged => "Account role changed, please sign in again",
            Rejection::StorageUnavailable => "Unable to verify account",
        }
    }
}

fn bearer_token(req: &ServiceRequest) -> Result<&str, Rejection> {
    req.headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(Rejection::MissingHeader)
}

async fn authenticate(req: &ServiceRequest) -> Result<entities::User, Rejection> {
    let claims = JwtUtils::verify_access_token(bearer_token(req)?).map_err(|err| {
        debug!("Token verification failed: {}", err);
        Rejection::InvalidToken
    })?;
    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| Rejection::InvalidToken)?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .ok_or(Rejection::StorageUnavailable)?
        .get_ref()
        .clone();

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|e| {
            warn!("Loading account {} failed: {}", user_id, e);
            Rejection::StorageUnavailable
        })?
        .ok_or(Rejection::AccountMissing)?;

    if user.role.to_string() != claims.role {
        return Err(Rejection::RoleChanged);
    }
    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
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
        Box::pin(async move {
            // CORS 预检请求不带令牌
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match authenticate(&req).await {
                Ok(user) => {
                    debug!("Authenticated {} ({})", user.username, user.role);
                    req.extensions_mut().insert(user);
                    Ok(srv.call(req).await?.map_into_left_body())
                }
                Err(rejection) => {
                    info!("{} {} rejected: {:?}", req.method(), req.path(), rejection);
                    let status = match rejection {
                        Rejection::StorageUnavailable => StatusCode::SERVICE_UNAVAILABLE,
                        _ => StatusCode::UNAUTHORIZED,
                    };
                    let code = match rejection {
                        Rejection::StorageUnavailable => ErrorCode::InternalServerError,
                        _ => ErrorCode::Unauthorized,
                    };
                    Ok(req.into_response(
                        create_error_response(status, code, rejection.message())
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 当前账号，只在挂了 RequireJWT 的路由中有值
    pub fn extract_user_claims(req: &actix_web::HttpRequest) -> Option<entities::User> {
        req.extensions().get::<entities::User>().cloned()
    }

    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<entities::User>().map(|user| user.id)
    }
}
