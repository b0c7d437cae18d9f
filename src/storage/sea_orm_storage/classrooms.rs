//! 班级存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::classrooms::{ActiveModel, Column, Entity as Classrooms};
use crate::errors::Result;
use crate::models::classrooms::{
    entities::Classroom,
    requests::{ClassroomQueryParams, ClassroomRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_classrooms_impl(&self, query: ClassroomQueryParams) -> Result<Vec<Classroom>> {
        let mut select = Classrooms::find();

        if let Some(year_id) = query.academic_year_id {
            select = select.filter(Column::AcademicYearId.eq(year_id));
        }
        if let Some(grade_level_id) = query.grade_level_id {
            select = select.filter(Column::GradeLevelId.eq(grade_level_id));
        }

        let classrooms = select
            .order_by_asc(Column::GradeLevelId)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询班级列表失败", e))?;

        Ok(classrooms.into_iter().map(|m| m.into_classroom()).collect())
    }

    pub async fn get_classroom_impl(&self, id: i64) -> Result<Option<Classroom>> {
        let result = Classrooms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询班级失败", e))?;

        Ok(result.map(|m| m.into_classroom()))
    }

    pub async fn create_classroom_impl(&self, req: ClassroomRequest) -> Result<Classroom> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            grade_level_id: Set(req.grade_level_id),
            academic_year_id: Set(req.academic_year_id),
            capacity: Set(req.capacity),
            room_number: Set(req.room_number),
            class_teacher_id: Set(req.class_teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建班级失败", e))?;

        Ok(result.into_classroom())
    }

    pub async fn update_classroom_impl(
        &self,
        id: i64,
        req: ClassroomRequest,
    ) -> Result<Option<Classroom>> {
        if self.get_classroom_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name.trim().to_string()),
            grade_level_id: Set(req.grade_level_id),
            academic_year_id: Set(req.academic_year_id),
            capacity: Set(req.capacity),
            room_number: Set(req.room_number),
            class_teacher_id: Set(req.class_teacher_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新班级失败", e))?;

        Ok(Some(result.into_classroom()))
    }

    pub async fn delete_classroom_impl(&self, id: i64) -> Result<bool> {
        let result = Classrooms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除班级失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
