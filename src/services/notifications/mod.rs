pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::notifications::requests::{NotificationQueryParams, NotificationRequest};
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
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

    // 按创建时间倒序分页，可按对象与发布状态筛选
    pub async fn list_notifications(
        &self,
        request: &HttpRequest,
        query: NotificationQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_notifications(self, request, query).await
    }

    pub async fn get_notification(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_notification(self, request, id).await
    }

    // 发布人取当前登录账号
    pub async fn create_notification(
        &self,
        request: &HttpRequest,
        notification_data: NotificationRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_notification(self, request, notification_data).await
    }

    pub async fn update_notification(
        &self,
        request: &HttpRequest,
        id: i64,
        notification_data: NotificationRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_notification(self, request, id, notification_data).await
    }

    pub async fn delete_notification(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_notification(self, request, id).await
    }
}
