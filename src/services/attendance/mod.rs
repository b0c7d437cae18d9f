pub mod create;
pub mod delete;
pub mod import;
pub mod list;
pub(crate) mod sheet;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::storage_from_request;
use crate::models::attendance::requests::{
    AttendanceImportParams, AttendanceQueryParams, AttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 分页获取考勤记录，可按日期、教师、状态筛选
    pub async fn list_attendance(
        &self,
        request: &HttpRequest,
        query: AttendanceQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, request, query).await
    }

    // 登记考勤；同一教师同一天已有记录时覆盖
    pub async fn record_attendance(
        &self,
        request: &HttpRequest,
        attendance_data: AttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        create::record_attendance(self, request, attendance_data).await
    }

    pub async fn update_attendance(
        &self,
        request: &HttpRequest,
        id: i64,
        attendance_data: AttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_attendance(self, request, id, attendance_data).await
    }

    pub async fn delete_attendance(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_attendance(self, request, id).await
    }

    // 表格批量导入，全部成功或全部拒绝
    pub async fn import_attendance(
        &self,
        request: &HttpRequest,
        params: AttendanceImportParams,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        import::import_attendance(self, request, params, payload).await
    }
}
