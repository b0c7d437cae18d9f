//! 服务层共用的响应构造
//!
//! 存储层错误、字段校验错误与缺失引用在各服务中的处理方式一致，统一放在这里。

use std::future::Future;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};
use tracing::error;

use crate::errors::{Result, SchoolAdminError};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::validation::{FieldErrors, OVERLAP_MESSAGE};

// 从 app data 中取出共享存储
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

/// 字段校验失败：400，data 为字段错误表
///
/// 课时时间段冲突使用单独的错误码，前端据此高亮时间输入框。
pub(crate) fn validation_failed(errors: FieldErrors) -> HttpResponse {
    let code = if errors.contains_message(OVERLAP_MESSAGE) {
        ErrorCode::PeriodOverlap
    } else {
        ErrorCode::ValidationFailed
    };
    let message = format!("Validation failed: {}", errors.summary());
    HttpResponse::BadRequest().json(ApiResponse::error(code, errors, message))
}

pub(crate) fn not_found(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

// 引用的实体不存在，按字段返回
pub(crate) fn missing_reference(field: &str, message: &str) -> HttpResponse {
    let mut errors = FieldErrors::new();
    errors.add(field, message);
    HttpResponse::BadRequest().json(ApiResponse::error(
        ErrorCode::ReferenceNotFound,
        errors,
        message,
    ))
}

/// 存储层错误转 HTTP 响应
///
/// 唯一约束冲突返回 409 Conflict，外键约束（删除仍被引用的记录）返回 409 ReferenceInUse，
/// 其余为 500。
pub(crate) fn storage_failure(action: &str, err: SchoolAdminError) -> HttpResponse {
    match err {
        SchoolAdminError::Conflict(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                format!("{action} failed: {msg}"),
            ))
        }
        SchoolAdminError::Constraint(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ReferenceInUse,
                format!("{action} failed: record is still referenced ({msg})"),
            ))
        }
        other => {
            error!("{} failed: {}", action, other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("{action} failed: {other}"),
            ))
        }
    }
}

/// 写入前确认被引用的记录存在
///
/// 不存在时返回 400 ReferenceNotFound，字段名为请求中的外键字段。
pub(crate) async fn require_reference<T, F>(
    lookup: F,
    field: &str,
    label: &str,
) -> std::result::Result<T, HttpResponse>
where
    F: Future<Output = Result<Option<T>>>,
{
    match lookup.await {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(missing_reference(field, &format!("{label} not found"))),
        Err(e) => Err(storage_failure(&format!("Looking up {label}"), e)),
    }
}

/// 可选外键：为 None 时跳过检查
pub(crate) async fn require_optional_reference<T, F>(
    id: Option<i64>,
    lookup: impl FnOnce(i64) -> F,
    field: &str,
    label: &str,
) -> std::result::Result<Option<T>, HttpResponse>
where
    F: Future<Output = Result<Option<T>>>,
{
    match id {
        Some(id) => require_reference(lookup(id), field, label).await.map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    async fn response_code(resp: HttpResponse) -> i64 {
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        json["code"].as_i64().unwrap()
    }

    #[actix_web::test]
    async fn test_overlap_uses_dedicated_code() {
        let mut errors = FieldErrors::new();
        errors.add(
            "start_time",
            "Time slot overlaps with an existing period: Period 1 (09:00-10:00)",
        );
        let resp = validation_failed(errors);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response_code(resp).await, 3201);

        let mut errors = FieldErrors::new();
        errors.add("start_time", "Invalid time format, expected HH:MM");
        let resp = validation_failed(errors);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response_code(resp).await, 1001);
    }

    #[test]
    fn test_storage_failure_status() {
        assert_eq!(
            storage_failure("Create", SchoolAdminError::conflict("dup")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            storage_failure("Delete", SchoolAdminError::constraint("fk")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            storage_failure("Create", SchoolAdminError::database_operation("x")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_require_reference() {
        let found = require_reference(async { Ok(Some(7)) }, "term_id", "Term").await;
        assert_eq!(found.ok(), Some(7));

        let missing =
            require_reference(async { Ok(None::<i64>) }, "term_id", "Term").await;
        assert_eq!(
            missing.err().map(|r| r.status()),
            Some(StatusCode::BAD_REQUEST)
        );

        let skipped: std::result::Result<Option<i64>, _> = require_optional_reference(
            None,
            |_| async { Ok(None::<i64>) },
            "classroom_id",
            "Classroom",
        )
        .await;
        assert!(matches!(skipped, Ok(None)));
    }
}
