use crate::models::{
    PaginatedResponse,
    academic_years::{entities::AcademicYear, requests::AcademicYearRequest},
    attendance::{
        entities::TeacherAttendance,
        requests::{AttendanceListQuery, AttendanceRequest, NewAttendance},
    },
    classrooms::{
        entities::Classroom,
        requests::{ClassroomQueryParams, ClassroomRequest},
    },
    exam_results::{entities::ExamResult, requests::ExamResultRequest},
    exams::{
        entities::Exam,
        requests::{ExamListQuery, ExamRequest},
    },
    fee_structures::{
        entities::FeeStructure,
        requests::{FeeStructureListQuery, FeeStructureRequest},
    },
    grade_levels::{entities::GradeLevel, requests::GradeLevelRequest},
    notifications::{
        entities::Notification,
        requests::{NotificationListQuery, NotificationRequest},
    },
    periods::{entities::Period, requests::PeriodRequest},
    subjects::{entities::Subject, requests::SubjectRequest},
    teachers::{
        entities::Teacher,
        requests::{TeacherListQuery, TeacherRequest},
    },
    terms::{entities::Term, requests::TermRequest},
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;
use std::sync::Arc;

pub mod sea_orm_storage;

pub use sea_orm_storage::SeaOrmStorage;

/// 存储抽象
///
/// 更新方法在记录不存在时返回 `Ok(None)`，删除方法返回是否删除了记录。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 后台账号
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn count_users(&self) -> Result<u64>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 学年
    async fn list_academic_years(&self) -> Result<Vec<AcademicYear>>;
    async fn get_academic_year(&self, id: i64) -> Result<Option<AcademicYear>>;
    // is_current 为 true 时清除其他学年的当前标记
    async fn create_academic_year(&self, req: AcademicYearRequest) -> Result<AcademicYear>;
    async fn update_academic_year(
        &self,
        id: i64,
        req: AcademicYearRequest,
    ) -> Result<Option<AcademicYear>>;
    async fn delete_academic_year(&self, id: i64) -> Result<bool>;

    /// 学期
    async fn list_terms(&self, academic_year_id: Option<i64>) -> Result<Vec<Term>>;
    async fn get_term(&self, id: i64) -> Result<Option<Term>>;
    async fn create_term(&self, req: TermRequest) -> Result<Term>;
    async fn update_term(&self, id: i64, req: TermRequest) -> Result<Option<Term>>;
    async fn delete_term(&self, id: i64) -> Result<bool>;

    /// 课时，按 sort_order、开始时间排序
    async fn list_periods(&self) -> Result<Vec<Period>>;
    async fn get_period(&self, id: i64) -> Result<Option<Period>>;
    async fn create_period(&self, req: PeriodRequest) -> Result<Period>;
    async fn update_period(&self, id: i64, req: PeriodRequest) -> Result<Option<Period>>;
    async fn delete_period(&self, id: i64) -> Result<bool>;

    /// 年级
    async fn list_grade_levels(&self) -> Result<Vec<GradeLevel>>;
    async fn get_grade_level(&self, id: i64) -> Result<Option<GradeLevel>>;
    async fn create_grade_level(&self, req: GradeLevelRequest) -> Result<GradeLevel>;
    async fn update_grade_level(
        &self,
        id: i64,
        req: GradeLevelRequest,
    ) -> Result<Option<GradeLevel>>;
    async fn delete_grade_level(&self, id: i64) -> Result<bool>;

    /// 科目
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    async fn get_subject(&self, id: i64) -> Result<Option<Subject>>;
    async fn create_subject(&self, req: SubjectRequest) -> Result<Subject>;
    async fn update_subject(&self, id: i64, req: SubjectRequest) -> Result<Option<Subject>>;
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 班级
    async fn list_classrooms(&self, query: ClassroomQueryParams) -> Result<Vec<Classroom>>;
    async fn get_classroom(&self, id: i64) -> Result<Option<Classroom>>;
    async fn create_classroom(&self, req: ClassroomRequest) -> Result<Classroom>;
    async fn update_classroom(&self, id: i64, req: ClassroomRequest)
    -> Result<Option<Classroom>>;
    async fn delete_classroom(&self, id: i64) -> Result<bool>;

    /// 教师
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<PaginatedResponse<Teacher>>;
    // 导入时解析工号用
    async fn list_all_teachers(&self) -> Result<Vec<Teacher>>;
    async fn get_teacher(&self, id: i64) -> Result<Option<Teacher>>;
    async fn get_teacher_by_staff_number(&self, staff_number: &str) -> Result<Option<Teacher>>;
    async fn create_teacher(&self, req: TeacherRequest) -> Result<Teacher>;
    async fn update_teacher(&self, id: i64, req: TeacherRequest) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 考试
    async fn list_exams_with_pagination(
        &self,
        query: ExamListQuery,
    ) -> Result<PaginatedResponse<Exam>>;
    async fn get_exam(&self, id: i64) -> Result<Option<Exam>>;
    async fn create_exam(&self, req: ExamRequest) -> Result<Exam>;
    async fn update_exam(&self, id: i64, req: ExamRequest) -> Result<Option<Exam>>;
    async fn delete_exam(&self, id: i64) -> Result<bool>;

    /// 考试成绩
    async fn list_exam_results(&self, exam_id: i64) -> Result<Vec<ExamResult>>;
    // 同一考试内按学号覆盖
    async fn upsert_exam_result(&self, exam_id: i64, req: ExamResultRequest)
    -> Result<ExamResult>;

    /// 通知
    async fn list_notifications_with_pagination(
        &self,
        query: NotificationListQuery,
    ) -> Result<PaginatedResponse<Notification>>;
    async fn get_notification(&self, id: i64) -> Result<Option<Notification>>;
    async fn create_notification(
        &self,
        req: NotificationRequest,
        created_by: Option<i64>,
    ) -> Result<Notification>;
    async fn update_notification(
        &self,
        id: i64,
        req: NotificationRequest,
    ) -> Result<Option<Notification>>;
    async fn delete_notification(&self, id: i64) -> Result<bool>;

    /// 收费标准
    async fn list_fee_structures_with_pagination(
        &self,
        query: FeeStructureListQuery,
    ) -> Result<PaginatedResponse<FeeStructure>>;
    async fn get_fee_structure(&self, id: i64) -> Result<Option<FeeStructure>>;
    async fn create_fee_structure(&self, req: FeeStructureRequest) -> Result<FeeStructure>;
    async fn update_fee_structure(
        &self,
        id: i64,
        req: FeeStructureRequest,
    ) -> Result<Option<FeeStructure>>;
    async fn delete_fee_structure(&self, id: i64) -> Result<bool>;

    /// 教师考勤
    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<PaginatedResponse<TeacherAttendance>>;
    // 同一教师同一天只保留一条
    async fn upsert_attendance(&self, record: NewAttendance) -> Result<TeacherAttendance>;
    async fn update_attendance(
        &self,
        id: i64,
        req: AttendanceRequest,
    ) -> Result<Option<TeacherAttendance>>;
    async fn delete_attendance(&self, id: i64) -> Result<bool>;
    // 整批在一个事务中写入，任一失败则全部回滚
    async fn import_attendance(&self, records: Vec<NewAttendance>) -> Result<usize>;

    /// 数据库连通性
    async fn ping(&self) -> Result<()>;
}

/// 按配置创建存储实例
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
