use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 收费项目的七个组成部分
///
/// 总额始终由各项相加得到，不单独存储。
pub trait FeeComponents {
    fn components(&self) -> [(&'static str, f64); 7];

    fn total_amount(&self) -> f64 {
        self.components().iter().map(|(_, amount)| amount).sum()
    }
}

// 收费标准
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_structure.ts")]
pub struct FeeStructure {
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
    // 派生字段：各项之和
    pub total_amount: f64,
    pub due_date: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl FeeComponents for FeeStructure {
    fn components(&self) -> [(&'static str, f64); 7] {
        [
            ("tuition_fee", self.tuition_fee),
            ("exam_fee", self.exam_fee),
            ("lab_fee", self.lab_fee),
            ("library_fee", self.library_fee),
            ("sports_fee", self.sports_fee),
            ("transportation_fee", self.transportation_fee),
            ("other_fees", self.other_fees),
        ]
    }
}
