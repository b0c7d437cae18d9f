use super::{SeaOrmStorage, db_error};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::Result;
use crate::models::subjects::{entities::Subject, requests::SubjectRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询科目列表失败", e))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }

    pub async fn get_subject_impl(&self, id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询科目失败", e))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 创建科目，代码统一转为大写
    pub async fn create_subject_impl(&self, req: SubjectRequest) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            code: Set(req.code.trim().to_ascii_uppercase()),
            description: Set(req.description),
            is_core: Set(req.is_core),
            is_elective: Set(req.is_elective),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建科目失败", e))?;

        Ok(result.into_subject())
    }

    pub async fn update_subject_impl(
        &self,
        id: i64,
        req: SubjectRequest,
    ) -> Result<Option<Subject>> {
        if self.get_subject_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name.trim().to_string()),
            code: Set(req.code.trim().to_ascii_uppercase()),
            description: Set(req.description),
            is_core: Set(req.is_core),
            is_elective: Set(req.is_elective),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新科目失败", e))?;

        Ok(Some(result.into_subject()))
    }

    pub async fn delete_subject_impl(&self, id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除科目失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
