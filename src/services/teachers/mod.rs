pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::teachers::requests::{TeacherQueryParams, TeacherRequest};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 分页获取教师列表，支持按工号/姓名搜索
    pub async fn list_teachers(
        &self,
        request: &HttpRequest,
        query: TeacherQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request, query).await
    }

    pub async fn get_teacher(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_teacher(self, request, id).await
    }

    pub async fn create_teacher(
        &self,
        request: &HttpRequest,
        teacher_data: TeacherRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_teacher(self, request, teacher_data).await
    }

    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        id: i64,
        teacher_data: TeacherRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_teacher(self, request, id, teacher_data).await
    }

    // 教师的考勤记录随之删除
    pub async fn delete_teacher(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_teacher(self, request, id).await
    }
}
