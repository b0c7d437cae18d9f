pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::terms::requests::{TermQueryParams, TermRequest};
use crate::storage::Storage;

pub struct TermService {
    storage: Option<Arc<dyn Storage>>,
}

impl TermService {
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

    // 获取学期列表，可按学年筛选
    pub async fn list_terms(
        &self,
        request: &HttpRequest,
        query: TermQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_terms(self, request, query).await
    }

    pub async fn get_term(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_term(self, request, id).await
    }

    // 学期日期必须落在所属学年之内
    pub async fn create_term(
        &self,
        request: &HttpRequest,
        term_data: TermRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_term(self, request, term_data).await
    }

    pub async fn update_term(
        &self,
        request: &HttpRequest,
        id: i64,
        term_data: TermRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_term(self, request, id, term_data).await
    }

    pub async fn delete_term(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_term(self, request, id).await
    }
}
