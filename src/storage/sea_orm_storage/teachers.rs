//! 教师存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    teachers::{
        entities::Teacher,
        requests::{TeacherListQuery, TeacherRequest},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

// 空字符串视为未填写
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl SeaOrmStorage {
    /// 分页列出教师，支持按工号、姓名、邮箱搜索
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherListQuery,
    ) -> Result<PaginatedResponse<Teacher>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = Teachers::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::StaffNumber.contains(&escaped))
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        select = select.order_by_asc(Column::StaffNumber);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| db_error("查询教师总数失败", e))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| db_error("查询教师列表失败", e))?;

        Ok(PaginatedResponse {
            items: teachers.into_iter().map(|m| m.into_teacher()).collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    pub async fn list_all_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let teachers = Teachers::find()
            .order_by_asc(Column::StaffNumber)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询教师列表失败", e))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }

    pub async fn get_teacher_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询教师失败", e))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    pub async fn get_teacher_by_staff_number_impl(
        &self,
        staff_number: &str,
    ) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::StaffNumber.eq(staff_number.trim()))
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询教师失败", e))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    pub async fn create_teacher_impl(&self, req: TeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            staff_number: Set(req.staff_number.trim().to_string()),
            first_name: Set(req.first_name.trim().to_string()),
            last_name: Set(req.last_name.trim().to_string()),
            email: Set(non_empty(req.email)),
            phone: Set(non_empty(req.phone)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建教师失败", e))?;

        Ok(result.into_teacher())
    }

    pub async fn update_teacher_impl(
        &self,
        id: i64,
        req: TeacherRequest,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            staff_number: Set(req.staff_number.trim().to_string()),
            first_name: Set(req.first_name.trim().to_string()),
            last_name: Set(req.last_name.trim().to_string()),
            email: Set(non_empty(req.email)),
            phone: Set(non_empty(req.phone)),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新教师失败", e))?;

        Ok(Some(result.into_teacher()))
    }

    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除教师失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
