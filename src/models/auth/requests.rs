use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 登录请求
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
