pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::grade_levels::requests::GradeLevelRequest;
use crate::storage::Storage;

pub struct GradeLevelService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeLevelService {
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

    // 按 level 升序
    pub async fn list_grade_levels(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_grade_levels(self, request).await
    }

    pub async fn get_grade_level(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_grade_level(self, request, id).await
    }

    pub async fn create_grade_level(
        &self,
        request: &HttpRequest,
        grade_data: GradeLevelRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade_level(self, request, grade_data).await
    }

    pub async fn update_grade_level(
        &self,
        request: &HttpRequest,
        id: i64,
        grade_data: GradeLevelRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_grade_level(self, request, id, grade_data).await
    }

    // 仍有班级引用时拒绝删除
    pub async fn delete_grade_level(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_grade_level(self, request, id).await
    }
}
