//! 学年存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::academic_years::{ActiveModel, Column, Entity as AcademicYears};
use crate::errors::Result;
use crate::models::academic_years::{entities::AcademicYear, requests::AcademicYearRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 列出全部学年，最新的在前
    pub async fn list_academic_years_impl(&self) -> Result<Vec<AcademicYear>> {
        let years = AcademicYears::find()
            .order_by_desc(Column::StartDate)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询学年列表失败", e))?;

        Ok(years.into_iter().map(|m| m.into_academic_year()).collect())
    }

    pub async fn get_academic_year_impl(&self, id: i64) -> Result<Option<AcademicYear>> {
        let result = AcademicYears::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询学年失败", e))?;

        Ok(result.map(|m| m.into_academic_year()))
    }

    /// 创建学年；设为当前学年时，同一事务内清除其他学年的标记
    pub async fn create_academic_year_impl(
        &self,
        req: AcademicYearRequest,
    ) -> Result<AcademicYear> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| db_error("开启事务失败", e))?;

        if req.is_current {
            AcademicYears::update_many()
                .col_expr(Column::IsCurrent, Expr::value(false))
                .exec(&txn)
                .await
                .map_err(|e| db_error("清除当前学年失败", e))?;
        }

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            is_current: Set(req.is_current),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| db_error("创建学年失败", e))?;

        txn.commit()
            .await
            .map_err(|e| db_error("提交事务失败", e))?;

        Ok(result.into_academic_year())
    }

    pub async fn update_academic_year_impl(
        &self,
        id: i64,
        req: AcademicYearRequest,
    ) -> Result<Option<AcademicYear>> {
        if self.get_academic_year_impl(id).await?.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| db_error("开启事务失败", e))?;

        if req.is_current {
            AcademicYears::update_many()
                .col_expr(Column::IsCurrent, Expr::value(false))
                .filter(Column::Id.ne(id))
                .exec(&txn)
                .await
                .map_err(|e| db_error("清除当前学年失败", e))?;
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name.trim().to_string()),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            is_current: Set(req.is_current),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .update(&txn)
            .await
            .map_err(|e| db_error("更新学年失败", e))?;

        txn.commit()
            .await
            .map_err(|e| db_error("提交事务失败", e))?;

        Ok(Some(result.into_academic_year()))
    }

    pub async fn delete_academic_year_impl(&self, id: i64) -> Result<bool> {
        let result = AcademicYears::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除学年失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
