use super::{SeaOrmStorage, db_error};
use crate::entity::grade_levels::{ActiveModel, Column, Entity as GradeLevels};
use crate::errors::Result;
use crate::models::grade_levels::{entities::GradeLevel, requests::GradeLevelRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_grade_levels_impl(&self) -> Result<Vec<GradeLevel>> {
        let levels = GradeLevels::find()
            .order_by_asc(Column::Level)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询年级列表失败", e))?;

        Ok(levels.into_iter().map(|m| m.into_grade_level()).collect())
    }

    pub async fn get_grade_level_impl(&self, id: i64) -> Result<Option<GradeLevel>> {
        let result = GradeLevels::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询年级失败", e))?;

        Ok(result.map(|m| m.into_grade_level()))
    }

    pub async fn create_grade_level_impl(&self, req: GradeLevelRequest) -> Result<GradeLevel> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            level: Set(req.level),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建年级失败", e))?;

        Ok(result.into_grade_level())
    }

    pub async fn update_grade_level_impl(
        &self,
        id: i64,
        req: GradeLevelRequest,
    ) -> Result<Option<GradeLevel>> {
        if self.get_grade_level_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name.trim().to_string()),
            level: Set(req.level),
            description: Set(req.description),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新年级失败", e))?;

        Ok(Some(result.into_grade_level()))
    }

    pub async fn delete_grade_level_impl(&self, id: i64) -> Result<bool> {
        let result = GradeLevels::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除年级失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
