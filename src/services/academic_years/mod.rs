pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::academic_years::requests::AcademicYearRequest;
use crate::storage::Storage;

pub struct AcademicYearService {
    storage: Option<Arc<dyn Storage>>,
}

impl AcademicYearService {
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

    // 获取全部学年
    pub async fn list_academic_years(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_academic_years(self, request).await
    }

    pub async fn get_academic_year(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_academic_year(self, request, id).await
    }

    pub async fn create_academic_year(
        &self,
        request: &HttpRequest,
        year_data: AcademicYearRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_academic_year(self, request, year_data).await
    }

    pub async fn update_academic_year(
        &self,
        request: &HttpRequest,
        id: i64,
        year_data: AcademicYearRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_academic_year(self, request, id, year_data).await
    }

    // 仍被学期、班级或收费标准引用时拒绝删除
    pub async fn delete_academic_year(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_academic_year(self, request, id).await
    }
}
