//! 课时实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "periods")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub sort_order: i32,
    pub is_break: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_period(self) -> crate::models::periods::entities::Period {
        use crate::models::periods::entities::Period;
        use chrono::{DateTime, Utc};

        Period {
            id: self.id,
            name: self.name,
            start_time: self.start_time,
            end_time: self.end_time,
            sort_order: self.sort_order,
            is_break: self.is_break,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
