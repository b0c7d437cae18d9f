use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级：某学年内的一个学生群体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct Classroom {
    pub id: i64,
    pub name: String,
    pub grade_level_id: i64,
    pub academic_year_id: i64,
    pub capacity: i32,
    pub room_number: Option<String>,
    // 班主任（教师 ID）
    pub class_teacher_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
