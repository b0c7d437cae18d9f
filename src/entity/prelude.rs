//! 预导入模块，方便使用

pub use super::academic_years::{
    ActiveModel as AcademicYearActiveModel, Entity as AcademicYears, Model as AcademicYearModel,
};
pub use super::classrooms::{
    ActiveModel as ClassroomActiveModel, Entity as Classrooms, Model as ClassroomModel,
};
pub use super::exam_results::{
    ActiveModel as ExamResultActiveModel, Entity as ExamResults, Model as ExamResultModel,
};
pub use super::exams::{ActiveModel as ExamActiveModel, Entity as Exams, Model as ExamModel};
pub use super::fee_structures::{
    ActiveModel as FeeStructureActiveModel, Entity as FeeStructures, Model as FeeStructureModel,
};
pub use super::grade_levels::{
    ActiveModel as GradeLevelActiveModel, Entity as GradeLevels, Model as GradeLevelModel,
};
pub use super::notifications::{
    ActiveModel as NotificationActiveModel, Entity as Notifications, Model as NotificationModel,
};
pub use super::periods::{ActiveModel as PeriodActiveModel, Entity as Periods, Model as PeriodModel};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teacher_attendance::{
    ActiveModel as AttendanceActiveModel, Entity as TeacherAttendance, Model as AttendanceModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
pub use super::terms::{ActiveModel as TermActiveModel, Entity as Terms, Model as TermModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
