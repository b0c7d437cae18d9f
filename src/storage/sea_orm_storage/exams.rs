//! 考试存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::errors::Result;
use crate::models::{
    PaginatedResponse, PaginationInfo,
    exams::{
        entities::Exam,
        requests::{ExamListQuery, ExamRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 分页列出考试，按考试日期倒序
    pub async fn list_exams_with_pagination_impl(
        &self,
        query: ExamListQuery,
    ) -> Result<PaginatedResponse<Exam>> {
        let page = query.page.max(1);
        let size = query.size.clamp(1, 100);

        let mut select = Exams::find();

        if let Some(classroom_id) = query.classroom_id {
            select = select.filter(Column::ClassroomId.eq(classroom_id));
        }
        if let Some(term_id) = query.term_id {
            select = select.filter(Column::TermId.eq(term_id));
        }
        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        select = select
            .order_by_desc(Column::ExamDate)
            .order_by_asc(Column::StartTime);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| db_error("查询考试总数失败", e))?;

        let exams = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| db_error("查询考试列表失败", e))?;

        Ok(PaginatedResponse {
            items: exams.into_iter().map(|m| m.into_exam()).collect(),
            pagination: PaginationInfo::new(page as i64, size as i64, total as i64),
        })
    }

    pub async fn get_exam_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询考试失败", e))?;

        Ok(result.map(|m| m.into_exam()))
    }

    pub async fn create_exam_impl(&self, req: ExamRequest) -> Result<Exam> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name.trim().to_string()),
            exam_type: Set(req.exam_type.to_string()),
            subject_id: Set(req.subject_id),
            classroom_id: Set(req.classroom_id),
            term_id: Set(req.term_id),
            exam_date: Set(req.exam_date),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            total_marks: Set(req.total_marks),
            passing_marks: Set(req.passing_marks),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| db_error("创建考试失败", e))?;

        Ok(result.into_exam())
    }

    pub async fn update_exam_impl(&self, id: i64, req: ExamRequest) -> Result<Option<Exam>> {
        if self.get_exam_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            name: Set(req.name.trim().to_string()),
            exam_type: Set(req.exam_type.to_string()),
            subject_id: Set(req.subject_id),
            classroom_id: Set(req.classroom_id),
            term_id: Set(req.term_id),
            exam_date: Set(req.exam_date),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            total_marks: Set(req.total_marks),
            passing_marks: Set(req.passing_marks),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| db_error("更新考试失败", e))?;

        Ok(Some(result.into_exam()))
    }

    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| db_error("删除考试失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
