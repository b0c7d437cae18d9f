//! 数据模型定义
//!
//! 每个业务实体一个子模块：`entities` 为业务实体，`requests` 为请求体，
//! 部分实体另有 `responses`。

pub mod academic_years;
pub mod attendance;
pub mod auth;
pub mod classrooms;
pub mod common;
pub mod exam_results;
pub mod exams;
pub mod fee_structures;
pub mod grade_levels;
pub mod notifications;
pub mod periods;
pub mod subjects;
pub mod system;
pub mod teachers;
pub mod terms;
pub mod users;

mod error_code;

pub use common::{ApiResponse, PaginatedResponse, PaginationInfo, PaginationQuery};
pub use error_code::ErrorCode;

/// 程序启动时间，用于健康检查中的运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
