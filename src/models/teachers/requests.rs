use crate::models::common::PaginationQuery;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherRequest {
    pub staff_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherQueryParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

impl TeacherQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::from_parts(self.page, self.size)
    }
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct TeacherListQuery {
    pub page: u64,
    pub size: u64,
    pub search: Option<String>,
}
