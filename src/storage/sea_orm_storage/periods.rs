//! 课时存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::periods::{ActiveModel, Column, Entity as Periods};
use crate::errors::Result;
use crate::models::periods::{entities::Period, requests::PeriodRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

// 统一存为 HH:MM，保证按字符串排序与按时间排序一致
fn normalize_time(value: &str) -> String {
    crate::utils::validate::parse_time(value)
        .map(|t| t.format(crate::utils::validate::TIME_FORMAT).to_string())
        .unwrap_or_else(|_| value.trim().to_string())
}

impl SeaOrmStorage {
    pub async fn list_periods_impl(&self) -> Result<Vec<Period>> {
        let periods = Periods::find()
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询课时列表失败", e))?;

        Ok(periods.into_iter().map(|m| m.into_period()).collect())
    }

    pub async fn get_period_impl(&self, id: i64) -> Result<Option<Period>> {
        let result = Periods::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询课时失败", e))?;

        Ok(result.map(|m| m.into_period()))
    }

    pub async fn create_period_impl(&self, req: PeriodRequest) -> Result<Period> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            start_time: Set(normalize_time(&req.start_time)),
            end_time: Set(normalize_time(&req.end_time)),
            sort_order: Set(req.sort_order),
            is_break: Set(req.is_break),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建课时失败", e))?;

        Ok(result.into_period())
    }

    pub async fn update_period_impl(&self, id: i64, req: PeriodRequest) -> Result<Option<Period>> {
        if self.get_period_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name.trim().to_string()),
            start_time: Set(normalize_time(&req.start_time)),
            end_time: Set(normalize_time(&req.end_time)),
            sort_order: Set(req.sort_order),
            is_break: Set(req.is_break),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新课时失败", e))?;

        Ok(Some(result.into_period()))
    }

    pub async fn delete_period_impl(&self, id: i64) -> Result<bool> {
        let result = Periods::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除课时失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
