use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

/// 所有接口共用的响应外壳
///
/// `code` 为 0 表示成功，其他取值见 [`ErrorCode`]。
/// 校验失败时 `data` 携带字段错误表，导入失败时携带行错误列表。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    // 旧版后台不返回时间戳
    #[serde(default = "chrono::Utc::now")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T> {
    fn build(code: ErrorCode, data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::build(ErrorCode::Success, Some(data), message)
    }

    /// 成功但没有数据，例如删除或客户端离线时模拟的写操作
    pub fn success_without_data(message: impl Into<String>) -> Self {
        Self::build(ErrorCode::Success, None, message)
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self::build(code, Some(data), message)
    }

    pub fn is_success(&self) -> bool {
        self.code == ErrorCode::Success as i32
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::success_without_data(message)
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::build(code, None, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_timestamp_or_data() {
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(r#"{"code":1006,"message":"Term not found"}"#).unwrap();
        assert!(!envelope.is_success());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_empty_data_is_omitted() {
        let json = serde_json::to_value(ApiResponse::success_empty("Deleted")).unwrap();
        assert_eq!(json["code"], 0);
        assert!(json.get("data").is_none());
    }
}
