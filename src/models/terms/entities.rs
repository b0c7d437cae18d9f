use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学期，属于某一学年
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct Term {
    pub id: i64,
    pub academic_year_id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
