use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学年
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic_year.ts")]
pub struct AcademicYear {
    pub id: i64,
    pub name: String,
    // 开始日期 YYYY-MM-DD
    pub start_date: String,
    // 结束日期 YYYY-MM-DD
    pub end_date: String,
    // 是否为当前学年
    pub is_current: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
