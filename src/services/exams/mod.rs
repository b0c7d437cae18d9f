pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod results;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::{require_reference, storage_from_request};
use crate::models::exam_results::requests::ExamResultRequest;
use crate::models::exams::requests::{ExamQueryParams, ExamRequest};
use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            storage_from_request(request)
        }
    }

    // 分页获取考试列表，可按班级、学期、科目筛选
    pub async fn list_exams(
        &self,
        request: &HttpRequest,
        query: ExamQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_exams(self, request, query).await
    }

    pub async fn get_exam(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_exam(self, request, id).await
    }

    pub async fn create_exam(
        &self,
        request: &HttpRequest,
        exam_data: ExamRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exam(self, request, exam_data).await
    }

    pub async fn update_exam(
        &self,
        request: &HttpRequest,
        id: i64,
        exam_data: ExamRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_exam(self, request, id, exam_data).await
    }

    // 成绩随考试一并删除
    pub async fn delete_exam(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, request, id).await
    }

    pub async fn list_results(
        &self,
        request: &HttpRequest,
        exam_id: i64,
    ) -> ActixResult<HttpResponse> {
        results::list_results(self, request, exam_id).await
    }

    // 同一考试内按学号覆盖已有成绩
    pub async fn record_result(
        &self,
        request: &HttpRequest,
        exam_id: i64,
        result_data: ExamResultRequest,
    ) -> ActixResult<HttpResponse> {
        results::record_result(self, request, exam_id, result_data).await
    }
}

/// 考试引用的科目、班级、学期必须存在
pub(crate) async fn check_exam_references(
    storage: &Arc<dyn Storage>,
    exam_data: &ExamRequest,
) -> Result<(), HttpResponse> {
    require_reference(
        storage.get_subject(exam_data.subject_id),
        "subject_id",
        "Subject",
    )
    .await?;
    require_reference(
        storage.get_classroom(exam_data.classroom_id),
        "classroom_id",
        "Classroom",
    )
    .await?;
    require_reference(storage.get_term(exam_data.term_id), "term_id", "Term").await?;
    Ok(())
}
