use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_tables::{AcademicYears, Classrooms, Subjects, Terms};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 教师表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::StaffNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::FirstName).string().not_null())
                    .col(ColumnDef::new(Teachers::LastName).string().not_null())
                    .col(ColumnDef::new(Teachers::Email).string().null())
                    .col(ColumnDef::new(Teachers::Phone).string().null())
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // ==================== 考试表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::Name).string().not_null())
                    .col(ColumnDef::new(Exams::ExamType).string().not_null())
                    .col(ColumnDef::new(Exams::SubjectId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::ClassroomId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::TermId).big_integer().not_null())
                    .col(ColumnDef::new(Exams::ExamDate).string().not_null())
                    .col(ColumnDef::new(Exams::StartTime).string().not_null())
                    .col(ColumnDef::new(Exams::EndTime).string().not_null())
                    .col(ColumnDef::new(Exams::TotalMarks).double().not_null())
                    .col(ColumnDef::new(Exams::PassingMarks).double().not_null())
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Exams::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exams::Table, Exams::TermId)
                            .to(Terms::Table, Terms::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 考试成绩表 ====================
        manager
            .create_table(
                Table::create()
                    .table(ExamResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamResults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExamResults::ExamId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ExamResults::StudentNumber)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExamResults::StudentName).string().not_null())
                    .col(
                        ColumnDef::new(ExamResults::MarksObtained)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExamResults::Remarks).text().null())
                    .col(ColumnDef::new(ExamResults::Status).string().not_null())
                    .col(
                        ColumnDef::new(ExamResults::RecordedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExamResults::Table, ExamResults::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exam_results_exam_student")
                    .table(ExamResults::Table)
                    .col(ExamResults::ExamId)
                    .col(ExamResults::StudentNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ==================== 通知表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::Title).string().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(ColumnDef::new(Notifications::Audience).string().not_null())
                    .col(ColumnDef::new(Notifications::Priority).string().not_null())
                    .col(
                        ColumnDef::new(Notifications::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Notifications::CreatedBy).big_integer().null())
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Notifications::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 收费标准表 ====================
        manager
            .create_table(
                Table::create()
                    .table(FeeStructures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeeStructures::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FeeStructures::Name).string().not_null())
                    .col(
                        ColumnDef::new(FeeStructures::ClassroomId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(FeeStructures::TermId).big_integer().null())
                    .col(
                        ColumnDef::new(FeeStructures::AcademicYearId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeeStructures::TuitionFee).double().not_null())
                    .col(ColumnDef::new(FeeStructures::ExamFee).double().not_null())
                    .col(ColumnDef::new(FeeStructures::LabFee).double().not_null())
                    .col(ColumnDef::new(FeeStructures::LibraryFee).double().not_null())
                    .col(ColumnDef::new(FeeStructures::SportsFee).double().not_null())
                    .col(
                        ColumnDef::new(FeeStructures::TransportationFee)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeeStructures::OtherFees).double().not_null())
                    .col(ColumnDef::new(FeeStructures::DueDate).string().not_null())
                    .col(
                        ColumnDef::new(FeeStructures::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeeStructures::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FeeStructures::Table, FeeStructures::AcademicYearId)
                            .to(AcademicYears::Table, AcademicYears::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 教师考勤表 ====================
        manager
            .create_table(
                Table::create()
                    .table(TeacherAttendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TeacherAttendance::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TeacherAttendance::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TeacherAttendance::Date).string().not_null())
                    .col(ColumnDef::new(TeacherAttendance::Status).string().not_null())
                    .col(ColumnDef::new(TeacherAttendance::Remarks).text().null())
                    .col(
                        ColumnDef::new(TeacherAttendance::RecordedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TeacherAttendance::Table, TeacherAttendance::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 每位教师每天仅一条考勤记录
        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_attendance_teacher_date")
                    .table(TeacherAttendance::Table)
                    .col(TeacherAttendance::TeacherId)
                    .col(TeacherAttendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeacherAttendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeeStructures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Notifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExamResults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    StaffNumber,
    FirstName,
    LastName,
    Email,
    Phone,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Exams {
    #[sea_orm(iden = "exams")]
    Table,
    Id,
    Name,
    ExamType,
    SubjectId,
    ClassroomId,
    TermId,
    ExamDate,
    StartTime,
    EndTime,
    TotalMarks,
    PassingMarks,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ExamResults {
    #[sea_orm(iden = "exam_results")]
    Table,
    Id,
    ExamId,
    StudentNumber,
    StudentName,
    MarksObtained,
    Remarks,
    Status,
    RecordedAt,
}

#[derive(DeriveIden)]
enum Notifications {
    #[sea_orm(iden = "notifications")]
    Table,
    Id,
    Title,
    Message,
    Audience,
    Priority,
    Published,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FeeStructures {
    #[sea_orm(iden = "fee_structures")]
    Table,
    Id,
    Name,
    ClassroomId,
    TermId,
    AcademicYearId,
    TuitionFee,
    ExamFee,
    LabFee,
    LibraryFee,
    SportsFee,
    TransportationFee,
    OtherFees,
    DueDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TeacherAttendance {
    #[sea_orm(iden = "teacher_attendance")]
    Table,
    Id,
    TeacherId,
    Date,
    Status,
    Remarks,
    RecordedAt,
}
