//! 学期存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::terms::{ActiveModel, Column, Entity as Terms};
use crate::errors::Result;
use crate::models::terms::{entities::Term, requests::TermRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出学期，可按学年筛选
    pub async fn list_terms_impl(&self, academic_year_id: Option<i64>) -> Result<Vec<Term>> {
        let mut select = Terms::find();
        if let Some(year_id) = academic_year_id {
            select = select.filter(Column::AcademicYearId.eq(year_id));
        }

        let terms = select
            .order_by_asc(Column::StartDate)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询学期列表失败", e))?;

        Ok(terms.into_iter().map(|m| m.into_term()).collect())
    }

    pub async fn get_term_impl(&self, id: i64) -> Result<Option<Term>> {
        let result = Terms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询学期失败", e))?;

        Ok(result.map(|m| m.into_term()))
    }

    pub async fn create_term_impl(&self, req: TermRequest) -> Result<Term> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            academic_year_id: Set(req.academic_year_id),
            name: Set(req.name.trim().to_string()),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建学期失败", e))?;

        Ok(result.into_term())
    }

    pub async fn update_term_impl(&self, id: i64, req: TermRequest) -> Result<Option<Term>> {
        if self.get_term_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            academic_year_id: Set(req.academic_year_id),
            name: Set(req.name.trim().to_string()),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新学期失败", e))?;

        Ok(Some(result.into_term()))
    }

    pub async fn delete_term_impl(&self, id: i64) -> Result<bool> {
        let result = Terms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除学期失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
