pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::common::{require_optional_reference, require_reference, storage_from_request};
use crate::models::classrooms::requests::{ClassroomQueryParams, ClassroomRequest};
use crate::storage::Storage;

pub struct ClassroomService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassroomService {
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

    pub async fn list_classrooms(
        &self,
        request: &HttpRequest,
        query: ClassroomQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classrooms(self, request, query).await
    }

    pub async fn get_classroom(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_classroom(self, request, id).await
    }

    pub async fn create_classroom(
        &self,
        request: &HttpRequest,
        classroom_data: ClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_classroom(self, request, classroom_data).await
    }

    pub async fn update_classroom(
        &self,
        request: &HttpRequest,
        id: i64,
        classroom_data: ClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_classroom(self, request, id, classroom_data).await
    }

    pub async fn delete_classroom(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_classroom(self, request, id).await
    }
}

/// 班级引用的年级、学年、班主任必须存在
pub(crate) async fn check_classroom_references(
    storage: &Arc<dyn Storage>,
    classroom_data: &ClassroomRequest,
) -> Result<(), HttpResponse> {
    require_reference(
        storage.get_grade_level(classroom_data.grade_level_id),
        "grade_level_id",
        "Grade level",
    )
    .await?;
    require_reference(
        storage.get_academic_year(classroom_data.academic_year_id),
        "academic_year_id",
        "Academic year",
    )
    .await?;
    require_optional_reference(
        classroom_data.class_teacher_id,
        |id| storage.get_teacher(id),
        "class_teacher_id",
        "Class teacher",
    )
    .await?;
    Ok(())
}
