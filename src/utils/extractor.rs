use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 路径中的 `{id}` 参数，要求为正整数
///
/// 解析失败时直接返回 400 与统一响应体，而不是 actix 默认的纯文本错误。
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

fn parse_positive_id(raw: Option<&str>) -> Result<i64, &'static str> {
    let raw = raw.ok_or("Missing id in path")?;
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err("Id must be a positive integer"),
    }
}

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = parse_positive_id(req.match_info().get("id"))
            .map(SafeIDI64)
            .map_err(|msg| {
                let response = HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg));
                InternalError::from_response(msg, response).into()
            });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id(Some("42")), Ok(42));
        assert!(parse_positive_id(Some("0")).is_err());
        assert!(parse_positive_id(Some("-3")).is_err());
        assert!(parse_positive_id(Some("abc")).is_err());
        assert!(parse_positive_id(None).is_err());
    }
}
