use super::entities::FeeComponents;
use crate::models::common::PaginationQuery;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 创建/更新收费标准请求，未填写的费用项按 0 处理
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_structure.ts")]
pub struct FeeStructureRequest {
    pub name: String,
    pub classroom_id: Option<i64>,
    pub term_id: Option<i64>,
    pub academic_year_id: i64,
    #[serde(default)]
    pub tuition_fee: f64,
    #[serde(default)]
    pub exam_fee: f64,
    #[serde(default)]
    pub lab_fee: f64,
    #[serde(default)]
    pub library_fee: f64,
    #[serde(default)]
    pub sports_fee: f64,
    #[serde(default)]
    pub transportation_fee: f64,
    #[serde(default)]
    pub other_fees: f64,
    pub due_date: String,
}

impl FeeComponents for FeeStructureRequest {
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

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_structure.ts")]
pub struct FeeStructureQueryParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub academic_year_id: Option<i64>,
    pub classroom_id: Option<i64>,
}

impl FeeStructureQueryParams {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery::from_parts(self.page, self.size)
    }
}

// 收费标准列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct FeeStructureListQuery {
    pub page: u64,
    pub size: u64,
    pub academic_year_id: Option<i64>,
    pub classroom_id: Option<i64>,
}
