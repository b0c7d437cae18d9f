use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 健康检查响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub system_name: String,
    pub version: String,
    pub environment: String,
    pub uptime_seconds: i64,
    pub database_ok: bool,
}
