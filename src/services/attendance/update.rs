use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::attendance::requests::AttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{
    not_found, require_reference, storage_failure, validation_failed,
};
use crate::utils::validate::normalize_date;
use crate::validation::validate_attendance;

pub async fn update_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    id: i64,
    mut attendance_data: AttendanceRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_attendance(&attendance_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = require_reference(
        storage.get_teacher(attendance_data.teacher_id),
        "teacher_id",
        "Teacher",
    )
    .await
    {
        return Ok(resp);
    }

    if let Ok(date) = normalize_date(&attendance_data.date) {
        attendance_data.date = date;
    }
    attendance_data.remarks = attendance_data
        .remarks
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());

    // 改到已有记录的日期时由唯一索引拦截，返回 409
    match storage.update_attendance(id, attendance_data).await {
        Ok(Some(attendance)) => {
            info!("Attendance {} updated", attendance.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                attendance,
                "Attendance updated successfully",
            )))
        }
        Ok(None) => Ok(not_found(
            ErrorCode::AttendanceNotFound,
            "Attendance record not found",
        )),
        Err(e) => Ok(storage_failure("Attendance update", e)),
    }
}
