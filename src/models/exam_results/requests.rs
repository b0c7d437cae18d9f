use super::entities::ResultStatus;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 录入成绩请求，同一考试内按学号覆盖
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam_result.ts")]
pub struct ExamResultRequest {
    pub student_number: String,
    pub student_name: String,
    pub marks_obtained: f64,
    pub remarks: Option<String>,
    #[serde(default)]
    pub status: ResultStatus,
}
