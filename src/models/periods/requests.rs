use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 创建/更新课时请求
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/period.ts")]
pub struct PeriodRequest {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub is_break: bool,
}
