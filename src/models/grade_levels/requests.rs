use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade_level.ts")]
pub struct GradeLevelRequest {
    pub name: String,
    pub level: i32,
    pub description: Option<String>,
}
