pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

use super::common::storage_from_request;
use crate::models::periods::requests::PeriodRequest;
use crate::storage::Storage;

pub struct PeriodService {
    storage: Option<Arc<dyn Storage>>,
    // 重叠检查与写入之间不能插入其他课时写入
    write_lock: Mutex<()>,
}

impl PeriodService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            write_lock: Mutex::new(()),
        }
    }

    pub(crate) async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            storage_from_request(request)
        }
    }

    pub async fn list_periods(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_periods(self, request).await
    }

    pub async fn get_period(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::get_period(self, request, id).await
    }

    // 新课时不得与任何已有课时时间重叠
    pub async fn create_period(
        &self,
        request: &HttpRequest,
        period_data: PeriodRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_period(self, request, period_data).await
    }

    // 编辑时排除自身后再做重叠检查
    pub async fn update_period(
        &self,
        request: &HttpRequest,
        id: i64,
        period_data: PeriodRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_period(self, request, id, period_data).await
    }

    pub async fn delete_period(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_period(self, request, id).await
    }
}
