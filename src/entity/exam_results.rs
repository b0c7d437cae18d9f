//! 考试成绩实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exam_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub exam_id: i64,
    pub student_number: String,
    pub student_name: String,
    pub marks_obtained: f64,
    pub remarks: Option<String>,
    pub status: String,
    pub recorded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exams::Entity",
        from = "Column::ExamId",
        to = "super::exams::Column::Id"
    )]
    Exam,
}

impl Related<super::exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_exam_result(self) -> crate::models::exam_results::entities::ExamResult {
        use crate::models::exam_results::entities::{ExamResult, ResultStatus};
        use chrono::{DateTime, Utc};

        ExamResult {
            id: self.id,
            exam_id: self.exam_id,
            student_number: self.student_number,
            student_name: self.student_name,
            marks_obtained: self.marks_obtained,
            remarks: self.remarks,
            status: self.status.parse::<ResultStatus>().unwrap_or_default(),
            recorded_at: DateTime::<Utc>::from_timestamp(self.recorded_at, 0).unwrap_or_default(),
        }
    }
}
