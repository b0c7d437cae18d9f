use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 创建/更新科目请求
//
// is_core 与 is_elective 至少有一个为 true
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectRequest {
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    #[serde(default)]
    pub is_core: bool,
    #[serde(default)]
    pub is_elective: bool,
}
