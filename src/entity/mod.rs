//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod academic_years;
pub mod classrooms;
pub mod exam_results;
pub mod exams;
pub mod fee_structures;
pub mod grade_levels;
pub mod notifications;
pub mod periods;
pub mod subjects;
pub mod teacher_attendance;
pub mod teachers;
pub mod terms;
pub mod users;
