pub(crate) mod common;

pub mod academic_years;
pub mod attendance;
pub mod auth;
pub mod classrooms;
pub mod exams;
pub mod fee_structures;
pub mod grade_levels;
pub mod notifications;
pub mod periods;
pub mod subjects;
pub mod system;
pub mod teachers;
pub mod terms;

pub use academic_years::AcademicYearService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use classrooms::ClassroomService;
pub use exams::ExamService;
pub use fee_structures::FeeStructureService;
pub use grade_levels::GradeLevelService;
pub use notifications::NotificationService;
pub use periods::PeriodService;
pub use subjects::SubjectService;
pub use system::SystemService;
pub use teachers::TeacherService;
pub use terms::TermService;
