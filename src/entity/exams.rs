//! 考试实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub exam_type: String,
    pub subject_id: i64,
    pub classroom_id: i64,
    pub term_id: i64,
    pub exam_date: String,
    pub start_time: String,
    pub end_time: String,
    pub total_marks: f64,
    pub passing_marks: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::classrooms::Entity",
        from = "Column::ClassroomId",
        to = "super::classrooms::Column::Id"
    )]
    Classroom,
    #[sea_orm(has_many = "super::exam_results::Entity")]
    Results,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::classrooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl Related<super::exam_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Results.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_exam(self) -> crate::models::exams::entities::Exam {
        use crate::models::exams::entities::{Exam, ExamType};
        use chrono::{DateTime, Utc};

        Exam {
            id: self.id,
            name: self.name,
            exam_type: self.exam_type.parse::<ExamType>().unwrap_or(ExamType::Quiz),
            subject_id: self.subject_id,
            classroom_id: self.classroom_id,
            term_id: self.term_id,
            exam_date: self.exam_date,
            start_time: self.start_time,
            end_time: self.end_time,
            total_marks: self.total_marks,
            passing_marks: self.passing_marks,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
