use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 成绩审核状态
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/exam_result.ts")]
pub enum ResultStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultStatus::Pending => write!(f, "pending"),
            ResultStatus::Approved => write!(f, "approved"),
            ResultStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ResultStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ResultStatus::Pending),
            "approved" => Ok(ResultStatus::Approved),
            "rejected" => Ok(ResultStatus::Rejected),
            _ => Err(format!("Invalid result status: {s}")),
        }
    }
}

// 考试成绩
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam_result.ts")]
pub struct ExamResult {
    pub id: i64,
    pub exam_id: i64,
    pub student_number: String,
    pub student_name: String,
    pub marks_obtained: f64,
    pub remarks: Option<String>,
    pub status: ResultStatus,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}
