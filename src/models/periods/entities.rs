use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课时（每日固定时间段）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/period.ts")]
pub struct Period {
    pub id: i64,
    pub name: String,
    // 开始时间 HH:MM
    pub start_time: String,
    // 结束时间 HH:MM
    pub end_time: String,
    // 列表展示顺序
    pub sort_order: i32,
    // 是否为课间休息
    pub is_break: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
