pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::{require_optional_reference, require_reference, storage_from_request};
use crate::models::fee_structures::requests::{FeeStructureQueryParams, FeeStructureRequest};
use crate::storage::Storage;

pub struct FeeStructureService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeStructureService {
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

    pub async fn list_fee_structures(
        &self,
        request: &HttpRequest,
        query: FeeStructureQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_fee_structures(self, request, query).await
    }

    pub async fn get_fee_structure(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_fee_structure(self, request, id).await
    }

    // 总额由各费用项相加，不接受客户端提交
    pub async fn create_fee_structure(
        &self,
        request: &HttpRequest,
        fee_data: FeeStructureRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_fee_structure(self, request, fee_data).await
    }

    pub async fn update_fee_structure(
        &self,
        request: &HttpRequest,
        id: i64,
        fee_data: FeeStructureRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_fee_structure(self, request, id, fee_data).await
    }

    pub async fn delete_fee_structure(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_fee_structure(self, request, id).await
    }
}

/// 学年必填；班级、学期可为空，填写时必须存在
pub(crate) async fn check_fee_references(
    storage: &Arc<dyn Storage>,
    fee_data: &FeeStructureRequest,
) -> Result<(), HttpResponse> {
    require_reference(
        storage.get_academic_year(fee_data.academic_year_id),
        "academic_year_id",
        "Academic year",
    )
    .await?;
    require_optional_reference(
        fee_data.classroom_id,
        |id| storage.get_classroom(id),
        "classroom_id",
        "Classroom",
    )
    .await?;
    require_optional_reference(
        fee_data.term_id,
        |id| storage.get_term(id),
        "term_id",
        "Term",
    )
    .await?;
    Ok(())
}
