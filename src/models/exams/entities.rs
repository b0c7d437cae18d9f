use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考试类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub enum ExamType {
    Quiz,
    Midterm,
    Final,
    Practical,
    Assignment,
}

impl std::fmt::Display for ExamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExamType::Quiz => "quiz",
            ExamType::Midterm => "midterm",
            ExamType::Final => "final",
            ExamType::Practical => "practical",
            ExamType::Assignment => "assignment",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiz" => Ok(ExamType::Quiz),
            "midterm" => Ok(ExamType::Midterm),
            "final" => Ok(ExamType::Final),
            "practical" => Ok(ExamType::Practical),
            "assignment" => Ok(ExamType::Assignment),
            _ => Err(format!("Invalid exam type: {s}")),
        }
    }
}

// 考试
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct Exam {
    pub id: i64,
    pub name: String,
    pub exam_type: ExamType,
    pub subject_id: i64,
    pub classroom_id: i64,
    pub term_id: i64,
    pub exam_date: String,
    pub start_time: String,
    pub end_time: String,
    pub total_marks: f64,
    pub passing_marks: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
