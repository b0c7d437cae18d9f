//! 考勤导入服务

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::StreamExt;
use tracing::{info, warn};

use super::AttendanceService;
use super::sheet::{read_rows, resolve_rows};
use crate::config::AppConfig;
use crate::models::attendance::requests::AttendanceImportParams;
use crate::models::attendance::responses::{AttendanceImportFailure, AttendanceImportResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{storage_failure, validation_failed};
use crate::utils::detect_spreadsheet;
use crate::utils::validate::parse_date;
use crate::validation::FieldErrors;

/// 上传读取失败
enum UploadError {
    Read(String),
    TooLarge(usize),
    MissingFile,
}

/// 导入考勤
pub async fn import_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    params: AttendanceImportParams,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let import_config = &AppConfig::get().import;

    // 日期列为空时使用的默认日期
    let default_date = match params.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => match parse_date(raw) {
            Ok(date) => date,
            Err(msg) => {
                let mut errors = FieldErrors::new();
                errors.add("date", msg);
                return Ok(validation_failed(errors));
            }
        },
        None => chrono::Local::now().date_naive(),
    };

    let (file_bytes, file_name) =
        match read_file_from_multipart(&mut payload, import_config.max_file_size).await {
            Ok(result) => result,
            Err(UploadError::TooLarge(limit)) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileSizeExceeded,
                    format!("File exceeds the maximum size of {limit} bytes"),
                )));
            }
            Err(UploadError::MissingFile) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    "Missing file field 'file'",
                )));
            }
            Err(UploadError::Read(e)) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    format!("Failed to read upload: {e}"),
                )));
            }
        };

    let Some(kind) = detect_spreadsheet(&file_bytes, &file_name) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileTypeNotAllowed,
            "Only .csv and .xlsx files are supported",
        )));
    };

    let rows = match read_rows(&file_bytes, kind) {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Attendance import of {} failed to parse: {}", file_name, e.message());
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(e.error_code(), e.message())));
        }
    };

    if rows.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            "The file contains no data rows",
        )));
    }

    if rows.len() > import_config.max_rows {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            format!(
                "A single import supports at most {} rows",
                import_config.max_rows
            ),
        )));
    }

    let storage = service.get_storage(request);

    let teachers = match storage.list_all_teachers().await {
        Ok(teachers) => teachers,
        Err(e) => return Ok(storage_failure("Loading teachers", e)),
    };

    let records = match resolve_rows(&rows, &teachers, default_date) {
        Ok(records) => records,
        Err(mut errors) => {
            let total_errors = errors.len();
            warn!(
                "Attendance import of {} rejected: {} row error(s)",
                file_name, total_errors
            );
            errors.truncate(import_config.reported_errors);
            let failure = AttendanceImportFailure {
                total_errors,
                errors,
            };
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error(
                ErrorCode::ImportFileDataInvalid,
                failure,
                format!("Import rejected: {total_errors} row(s) failed validation"),
            )));
        }
    };

    let total = records.len();
    match storage.import_attendance(records).await {
        Ok(imported) => {
            info!(
                "Attendance import of {} completed: {} record(s)",
                file_name, imported
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AttendanceImportResponse { total, imported },
                "Attendance imported successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Attendance import", e)),
    }
}

async fn read_file_from_multipart(
    payload: &mut Multipart,
    max_size: usize,
) -> Result<(Vec<u8>, String), UploadError> {
    let mut file_bytes = Vec::new();
    let mut file_name = String::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| UploadError::Read(e.to_string()))?;

        if field.name() != Some("file") {
            continue;
        }

        if let Some(content_disposition) = field.content_disposition() {
            file_name = content_disposition
                .get_filename()
                .unwrap_or("upload.csv")
                .to_string();
        }

        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| UploadError::Read(e.to_string()))?;
            if file_bytes.len() + data.len() > max_size {
                return Err(UploadError::TooLarge(max_size));
            }
            file_bytes.extend_from_slice(&data);
        }
    }

    if file_bytes.is_empty() {
        return Err(UploadError::MissingFile);
    }

    Ok((file_bytes, file_name))
}
