use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 导入行错误
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct ImportRowError {
    pub row: usize,
    pub field: String,
    pub message: String,
}

// 导入成功响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceImportResponse {
    pub total: usize,
    pub imported: usize,
}

// 导入失败响应：只返回前几条行错误
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceImportFailure {
    pub total_errors: usize,
    pub errors: Vec<ImportRowError>,
}
