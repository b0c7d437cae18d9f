use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 创建/更新学期请求
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct TermRequest {
    pub academic_year_id: i64,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

// 学期查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct TermQueryParams {
    pub academic_year_id: Option<i64>,
}
