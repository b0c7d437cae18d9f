//! 收费标准存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::fee_structures::{ActiveModel, Column, Entity as FeeStructures};
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    fee_structures::{
        entities::FeeStructure,
        requests::{FeeStructureListQuery, FeeStructureRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn list_fee_structures_with_pagination_impl(
        &self,
        query: FeeStructureListQuery,
    ) -> Result<PaginatedResponse<FeeStructure>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = FeeStructures::find();

        if let Some(year_id) = query.academic_year_id {
            select = select.filter(Column::AcademicYearId.eq(year_id));
        }
        if let Some(classroom_id) = query.classroom_id {
            select = select.filter(Column::ClassroomId.eq(classroom_id));
        }

        select = select.order_by_asc(Column::DueDate);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| db_error("查询收费标准总数失败", e))?;

        let fees = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| db_error("查询收费标准列表失败", e))?;

        Ok(PaginatedResponse {
            items: fees.into_iter().map(|m| m.into_fee_structure()).collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    pub async fn get_fee_structure_impl(&self, id: i64) -> Result<Option<FeeStructure>> {
        let result = FeeStructures::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询收费标准失败", e))?;

        Ok(result.map(|m| m.into_fee_structure()))
    }

    pub async fn create_fee_structure_impl(
        &self,
        req: FeeStructureRequest,
    ) -> Result<FeeStructure> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            classroom_id: Set(req.classroom_id),
            term_id: Set(req.term_id),
            academic_year_id: Set(req.academic_year_id),
            tuition_fee: Set(req.tuition_fee),
            exam_fee: Set(req.exam_fee),
            lab_fee: Set(req.lab_fee),
            library_fee: Set(req.library_fee),
            sports_fee: Set(req.sports_fee),
            transportation_fee: Set(req.transportation_fee),
            other_fees: Set(req.other_fees),
            due_date: Set(req.due_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建收费标准失败", e))?;

        Ok(result.into_fee_structure())
    }

    pub async fn update_fee_structure_impl(
        &self,
        id: i64,
        req: FeeStructureRequest,
    ) -> Result<Option<FeeStructure>> {
        if self.get_fee_structure_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name.trim().to_string()),
            classroom_id: Set(req.classroom_id),
            term_id: Set(req.term_id),
            academic_year_id: Set(req.academic_year_id),
            tuition_fee: Set(req.tuition_fee),
            exam_fee: Set(req.exam_fee),
            lab_fee: Set(req.lab_fee),
            library_fee: Set(req.library_fee),
            sports_fee: Set(req.sports_fee),
            transportation_fee: Set(req.transportation_fee),
            other_fees: Set(req.other_fees),
            due_date: Set(req.due_date),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新收费标准失败", e))?;

        Ok(Some(result.into_fee_structure()))
    }

    pub async fn delete_fee_structure_impl(&self, id: i64) -> Result<bool> {
        let result = FeeStructures::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除收费标准失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
