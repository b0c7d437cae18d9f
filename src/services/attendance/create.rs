use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::ApiResponse;
use crate::models::attendance::requests::{AttendanceRequest, NewAttendance};
use crate::services::common::{require_reference, storage_failure, validation_failed};
use crate::utils::validate::normalize_date;
use crate::validation::validate_attendance;

pub async fn record_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance_data: AttendanceRequest,
) -> ActixResult<HttpResponse> {
    if let Err(errors) = validate_attendance(&attendance_data) {
        return Ok(validation_failed(errors));
    }

    let storage = service.get_storage(request);

    let teacher = match require_reference(
        storage.get_teacher(attendance_data.teacher_id),
        "teacher_id",
        "Teacher",
    )
    .await
    {
        Ok(teacher) => teacher,
        Err(resp) => return Ok(resp),
    };

    let date = normalize_date(&attendance_data.date).unwrap_or(attendance_data.date);
    let record = NewAttendance {
        teacher_id: teacher.id,
        date,
        status: attendance_data.status,
        remarks: attendance_data
            .remarks
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty()),
    };

    match storage.upsert_attendance(record).await {
        Ok(attendance) => {
            info!(
                "Attendance {} recorded for {} on {}",
                attendance.status, teacher.staff_number, attendance.date
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                attendance,
                "Attendance recorded successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Recording attendance", e)),
    }
}
