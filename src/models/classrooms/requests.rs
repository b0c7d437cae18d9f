use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomRequest {
    pub name: String,
    pub grade_level_id: i64,
    pub academic_year_id: i64,
    pub capacity: i32,
    pub room_number: Option<String>,
    pub class_teacher_id: Option<i64>,
}

// 班级查询参数
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomQueryParams {
    pub academic_year_id: Option<i64>,
    pub grade_level_id: Option<i64>,
}
