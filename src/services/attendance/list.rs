use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::ApiResponse;
use crate::models::attendance::requests::{AttendanceListQuery, AttendanceQueryParams};
use crate::services::common::{storage_failure, validation_failed};
use crate::utils::validate::normalize_date;
use crate::validation::FieldErrors;

pub async fn list_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    query: AttendanceQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 日期筛选按字符串比较，先确认格式
    let date = match query.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => match normalize_date(raw) {
            Ok(date) => Some(date),
            Err(msg) => {
                let mut errors = FieldErrors::new();
                errors.add("date", msg);
                return Ok(validation_failed(errors));
            }
        },
        None => None,
    };

    let (page, size) = query.pagination().normalized();
    let list_query = AttendanceListQuery {
        page,
        size,
        date,
        teacher_id: query.teacher_id,
        status: query.status,
    };

    match storage.list_attendance_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Attendance list retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Listing attendance", e)),
    }
}
