use super::entities::ExamType;
use crate::models::common::PaginationQuery;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 创建/更新考试请求
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamRequest {
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
}

// 考试查询参数
//
// 含数字筛选字段，不使用 flatten（flatten 会把所有值缓冲成字符串）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamQueryParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub classroom_id: Option<i64>,
    pub term_id: Option<i64>,
    pub subject_id: Option<i64>,
}

impl ExamQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::from_parts(self.page, self.size)
    }
}

// 考试列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ExamListQuery {
    pub page: u64,
    pub size: u64,
    pub classroom_id: Option<i64>,
    pub term_id: Option<i64>,
    pub subject_id: Option<i64>,
}
