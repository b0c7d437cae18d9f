//! 考试成绩存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::exam_results::{ActiveModel, Column, Entity as ExamResults};
use crate::errors::Result;
use crate::models::exam_results::{entities::ExamResult, requests::ExamResultRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn list_exam_results_impl(&self, exam_id: i64) -> Result<Vec<ExamResult>> {
        let results = ExamResults::find()
            .filter(Column::ExamId.eq(exam_id))
            .order_by_asc(Column::StudentNumber)
            .all(&self.db)
            .await
            .map_err(|e| db_error("查询成绩列表失败", e))?;

        Ok(results.into_iter().map(|m| m.into_exam_result()).collect())
    }

    /// 写入成绩；同一考试同一学号已存在时覆盖
    pub async fn upsert_exam_result_impl(
        &self,
        exam_id: i64,
        req: ExamResultRequest,
    ) -> Result<ExamResult> {
        let now = chrono::Utc::now().timestamp();
        let student_number = req.student_number.trim().to_string();

        let existing = ExamResults::find()
            .filter(Column::ExamId.eq(exam_id))
            .filter(Column::StudentNumber.eq(student_number.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| db_error("查询成绩失败", e))?;

        let result = match existing {
            Some(row) => {
                let mut model: ActiveModel = row.into();
                model.student_name = Set(req.student_name.trim().to_string());
                model.marks_obtained = Set(req.marks_obtained);
                model.remarks = Set(req.remarks);
                model.status = Set(req.status.to_string());
                model.recorded_at = Set(now);
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| db_error("更新成绩失败", e))?
            }
            None => {
                let model = ActiveModel {
                    exam_id: Set(exam_id),
                    student_number: Set(student_number),
                    student_name: Set(req.student_name.trim().to_string()),
                    marks_obtained: Set(req.marks_obtained),
                    remarks: Set(req.remarks),
                    status: Set(req.status.to_string()),
                    recorded_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| db_error("录入成绩失败", e))?
            }
        };

        Ok(result.into_exam_result())
    }
}
