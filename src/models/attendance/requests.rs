use super::entities::AttendanceStatus;
use crate::models::common::PaginationQuery;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 单条考勤登记/修改请求
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRequest {
    pub teacher_id: i64,
    pub date: String,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceQueryParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub date: Option<String>,
    pub teacher_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::from_parts(self.page, self.size)
    }
}

// 导入参数：表格中日期为空时使用的默认日期
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceImportParams {
    pub date: Option<String>,
}

// 导入后写入存储的一条记录
#[derive(Debug, Clone, PartialEq)]
pub struct NewAttendance {
    pub teacher_id: i64,
    pub date: String,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
}

// 考勤列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct AttendanceListQuery {
    pub page: u64,
    pub size: u64,
    pub date: Option<String>,
    pub teacher_id: Option<i64>,
    pub status: Option<AttendanceStatus>,
}
