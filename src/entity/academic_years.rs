//! 学年实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_years")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::terms::Entity")]
    Terms,
    #[sea_orm(has_many = "super::classrooms::Entity")]
    Classrooms,
}

impl Related<super::terms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Terms.def()
    }
}

impl Related<super::classrooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classrooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_academic_year(self) -> crate::models::academic_years::entities::AcademicYear {
        use crate::models::academic_years::entities::AcademicYear;
        use chrono::{DateTime, Utc};

        AcademicYear {
            id: self.id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
