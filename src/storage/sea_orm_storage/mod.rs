//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod academic_years;
mod attendance;
mod classrooms;
mod exam_results;
mod exams;
mod fee_structures;
mod grade_levels;
mod notifications;
mod periods;
mod subjects;
mod teachers;
mod terms;
mod users;

use crate::config::AppConfig;
use crate::errors::{SchoolAdminError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 按给定参数连接数据库并执行迁移
    ///
    /// `sqlite::memory:` 只使用单个连接，否则每个连接各自是一个独立的空库。
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolAdminError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolAdminError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let in_memory = url.contains(":memory:");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(pool_size)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(pool_size.min(5))
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolAdminError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 数据库连通性检查
    pub async fn ping_impl(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| SchoolAdminError::database_connection(format!("数据库不可用: {e}")))
    }
}

/// 将数据库错误按约束类型归类
///
/// 唯一约束冲突归为 `Conflict`，外键约束归为 `Constraint`，其余为 `DatabaseOperation`。
pub(crate) fn db_error(context: &str, err: DbErr) -> SchoolAdminError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            SchoolAdminError::conflict(format!("{context}: {detail}"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            SchoolAdminError::constraint(format!("{context}: {detail}"))
        }
        _ => SchoolAdminError::database_operation(format!("{context}: {err}")),
    }
}

// Storage trait 实现
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

use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn list_academic_years(&self) -> Result<Vec<AcademicYear>> {
        self.list_academic_years_impl().await
    }

    async fn get_academic_year(&self, id: i64) -> Result<Option<AcademicYear>> {
        self.get_academic_year_impl(id).await
    }

    async fn create_academic_year(&self, req: AcademicYearRequest) -> Result<AcademicYear> {
        self.create_academic_year_impl(req).await
    }

    async fn update_academic_year(
        &self,
        id: i64,
        req: AcademicYearRequest,
    ) -> Result<Option<AcademicYear>> {
        self.update_academic_year_impl(id, req).await
    }

    async fn delete_academic_year(&self, id: i64) -> Result<bool> {
        self.delete_academic_year_impl(id).await
    }

    async fn list_terms(&self, academic_year_id: Option<i64>) -> Result<Vec<Term>> {
        self.list_terms_impl(academic_year_id).await
    }

    async fn get_term(&self, id: i64) -> Result<Option<Term>> {
        self.get_term_impl(id).await
    }

    async fn create_term(&self, req: TermRequest) -> Result<Term> {
        self.create_term_impl(req).await
    }

    async fn update_term(&self, id: i64, req: TermRequest) -> Result<Option<Term>> {
        self.update_term_impl(id, req).await
    }

    async fn delete_term(&self, id: i64) -> Result<bool> {
        self.delete_term_impl(id).await
    }

    async fn list_periods(&self) -> Result<Vec<Period>> {
        self.list_periods_impl().await
    }

    async fn get_period(&self, id: i64) -> Result<Option<Period>> {
        self.get_period_impl(id).await
    }

    async fn create_period(&self, req: PeriodRequest) -> Result<Period> {
        self.create_period_impl(req).await
    }

    async fn update_period(&self, id: i64, req: PeriodRequest) -> Result<Option<Period>> {
        self.update_period_impl(id, req).await
    }

    async fn delete_period(&self, id: i64) -> Result<bool> {
        self.delete_period_impl(id).await
    }

    async fn list_grade_levels(&self) -> Result<Vec<GradeLevel>> {
        self.list_grade_levels_impl().await
    }

    async fn get_grade_level(&self, id: i64) -> Result<Option<GradeLevel>> {
        self.get_grade_level_impl(id).await
    }

    async fn create_grade_level(&self, req: GradeLevelRequest) -> Result<GradeLevel> {
        self.create_grade_level_impl(req).await
    }

    async fn update_grade_level(
        &self,
        id: i64,
        req: GradeLevelRequest,
    ) -> Result<Option<GradeLevel>> {
        self.update_grade_level_impl(id, req).await
    }

    async fn delete_grade_level(&self, id: i64) -> Result<bool> {
        self.delete_grade_level_impl(id).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn get_subject(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_impl(id).await
    }

    async fn create_subject(&self, req: SubjectRequest) -> Result<Subject> {
        self.create_subject_impl(req).await
    }

    async fn update_subject(&self, id: i64, req: SubjectRequest) -> Result<Option<Subject>> {
        self.update_subject_impl(id, req).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn list_classrooms(&self, query: ClassroomQueryParams) -> Result<Vec<Classroom>> {
        self.list_classrooms_impl(query).await
    }

    async fn get_classroom(&self, id: i64) -> Result<Option<Classroom>> {
        self.get_classroom_impl(id).await
    }

    async fn create_classroom(&self, req: ClassroomRequest) -> Result<Classroom> {
        self.create_classroom_impl(req).await
    }

    async fn update_classroom(&self, id: i64, req: ClassroomRequest) -> Result<Option<Classroom>> {
        self.update_classroom_impl(id, req).await
    }

    async fn delete_classroom(&self, id: i64) -> Result<bool> {
        self.delete_classroom_impl(id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<PaginatedResponse<Teacher>> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn list_all_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_all_teachers_impl().await
    }

    async fn get_teacher(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_impl(id).await
    }

    async fn get_teacher_by_staff_number(&self, staff_number: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_staff_number_impl(staff_number).await
    }

    async fn create_teacher(&self, req: TeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(req).await
    }

    async fn update_teacher(&self, id: i64, req: TeacherRequest) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, req).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    async fn list_exams_with_pagination(
        &self,
        query: ExamListQuery,
    ) -> Result<PaginatedResponse<Exam>> {
        self.list_exams_with_pagination_impl(query).await
    }

    async fn get_exam(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_impl(id).await
    }

    async fn create_exam(&self, req: ExamRequest) -> Result<Exam> {
        self.create_exam_impl(req).await
    }

    async fn update_exam(&self, id: i64, req: ExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, req).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    async fn list_exam_results(&self, exam_id: i64) -> Result<Vec<ExamResult>> {
        self.list_exam_results_impl(exam_id).await
    }

    async fn upsert_exam_result(&self, exam_id: i64, req: ExamResultRequest) -> Result<ExamResult> {
        self.upsert_exam_result_impl(exam_id, req).await
    }

    async fn list_notifications_with_pagination(
        &self,
        query: NotificationListQuery,
    ) -> Result<PaginatedResponse<Notification>> {
        self.list_notifications_with_pagination_impl(query).await
    }

    async fn get_notification(&self, id: i64) -> Result<Option<Notification>> {
        self.get_notification_impl(id).await
    }

    async fn create_notification(
        &self,
        req: NotificationRequest,
        created_by: Option<i64>,
    ) -> Result<Notification> {
        self.create_notification_impl(req, created_by).await
    }

    async fn update_notification(
        &self,
        id: i64,
        req: NotificationRequest,
    ) -> Result<Option<Notification>> {
        self.update_notification_impl(id, req).await
    }

    async fn delete_notification(&self, id: i64) -> Result<bool> {
        self.delete_notification_impl(id).await
    }

    async fn list_fee_structures_with_pagination(
        &self,
        query: FeeStructureListQuery,
    ) -> Result<PaginatedResponse<FeeStructure>> {
        self.list_fee_structures_with_pagination_impl(query).await
    }

    async fn get_fee_structure(&self, id: i64) -> Result<Option<FeeStructure>> {
        self.get_fee_structure_impl(id).await
    }

    async fn create_fee_structure(&self, req: FeeStructureRequest) -> Result<FeeStructure> {
        self.create_fee_structure_impl(req).await
    }

    async fn update_fee_structure(
        &self,
        id: i64,
        req: FeeStructureRequest,
    ) -> Result<Option<FeeStructure>> {
        self.update_fee_structure_impl(id, req).await
    }

    async fn delete_fee_structure(&self, id: i64) -> Result<bool> {
        self.delete_fee_structure_impl(id).await
    }

    async fn list_attendance_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<PaginatedResponse<TeacherAttendance>> {
        self.list_attendance_with_pagination_impl(query).await
    }

    async fn upsert_attendance(&self, record: NewAttendance) -> Result<TeacherAttendance> {
        self.upsert_attendance_impl(record).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        req: AttendanceRequest,
    ) -> Result<Option<TeacherAttendance>> {
        self.update_attendance_impl(id, req).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }

    async fn import_attendance(&self, records: Vec<NewAttendance>) -> Result<usize> {
        self.import_attendance_impl(records).await
    }

    async fn ping(&self) -> Result<()> {
        self.ping_impl().await
    }
}
