use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 年级，按 level 排序
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade_level.ts")]
pub struct GradeLevel {
    pub id: i64,
    pub name: String,
    pub level: i32,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
