//! 收费标准实体
//!
//! 不存储总额，读出时由各费用项相加。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_structures")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub classroom_id: Option<i64>,
    pub term_id: Option<i64>,
    pub academic_year_id: i64,
    pub tuition_fee: f64,
    pub exam_fee: f64,
    pub lab_fee: f64,
    pub library_fee: f64,
    pub sports_fee: f64,
    pub transportation_fee: f64,
    pub other_fees: f64,
    pub due_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_fee_structure(self) -> crate::models::fee_structures::entities::FeeStructure {
        use crate::models::fee_structures::entities::{FeeComponents, FeeStructure};
        use chrono::{DateTime, Utc};

        let mut fee = FeeStructure {
            id: self.id,
            name: self.name,
            classroom_id: self.classroom_id,
            term_id: self.term_id,
            academic_year_id: self.academic_year_id,
            tuition_fee: self.tuition_fee,
            exam_fee: self.exam_fee,
            lab_fee: self.lab_fee,
            library_fee: self.library_fee,
            sports_fee: self.sports_fee,
            transportation_fee: self.transportation_fee,
            other_fees: self.other_fees,
            total_amount: 0.0,
            due_date: self.due_date,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        };
        fee.total_amount = fee.total_amount();
        fee
    }
}
