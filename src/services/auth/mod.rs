pub mod login;
pub mod me;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::auth::requests::LoginRequest;
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    /// 校验用户名密码并签发访问令牌
    pub async fn login(
        &self,
        request: &HttpRequest,
        credentials: LoginRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, request, credentials).await
    }

    pub async fn current_account(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        me::current_account(request).await
    }
}
