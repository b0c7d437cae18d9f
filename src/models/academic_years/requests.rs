use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 创建/更新学年请求（编辑时提交完整表单）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/academic_year.ts")]
pub struct AcademicYearRequest {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub is_current: bool,
}
