//! 考勤表格解析
//!
//! 先把 CSV / XLSX 读成统一的行结构，再对照教师名单逐行解析成考勤记录。
//! 解析过程不访问存储，便于单独测试。

use calamine::{Data, DataType, Reader, Xlsx};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Cursor;

use crate::models::ErrorCode;
use crate::models::attendance::entities::AttendanceStatus;
use crate::models::attendance::requests::NewAttendance;
use crate::models::attendance::responses::ImportRowError;
use crate::models::teachers::entities::Teacher;
use crate::utils::SpreadsheetKind;
use crate::utils::validate::{DATE_FORMAT, parse_date};

const REMARKS_MAX: usize = 500;

/// 导入文件级错误（整份文件无法使用）
#[derive(Debug, PartialEq)]
pub(crate) enum ImportParseError {
    MissingColumn(String),
    ParseFailed(String),
    EmptyFile,
}

impl ImportParseError {
    pub(crate) fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingColumn(_) => ErrorCode::ImportFileMissingColumn,
            Self::ParseFailed(_) => ErrorCode::ImportFileParseFailed,
            Self::EmptyFile => ErrorCode::ImportFileDataInvalid,
        }
    }

    pub(crate) fn message(&self) -> String {
        match self {
            Self::MissingColumn(col) => format!("Missing required column: {col}"),
            Self::ParseFailed(msg) => msg.clone(),
            Self::EmptyFile => "The file contains no data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ImportColumn {
    StaffNumber,
    TeacherId,
    Date,
    Status,
    Remarks,
}

// 表头别名，比较时统一转小写
const COLUMN_ALIASES: [(ImportColumn, &[&str]); 5] = [
    (
        ImportColumn::StaffNumber,
        &["staffnumber", "staff_number", "staff_no"],
    ),
    (ImportColumn::TeacherId, &["teacherid", "teacher_id"]),
    (ImportColumn::Date, &["date"]),
    (ImportColumn::Status, &["status", "attendance"]),
    (ImportColumn::Remarks, &["remarks", "note"]),
];

/// 各列在表头中的位置
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct ColumnIndex {
    staff_number: Option<usize>,
    teacher_id: Option<usize>,
    date: Option<usize>,
    status: Option<usize>,
    remarks: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Result<Self, ImportParseError> {
        let mut index = ColumnIndex::default();
        for (i, header) in headers.iter().enumerate() {
            let header = header.trim().to_lowercase();
            let column = COLUMN_ALIASES
                .iter()
                .find(|(_, aliases)| aliases.contains(&header.as_str()))
                .map(|(column, _)| *column);
            // 同一列出现多次时取第一个
            let slot = match column {
                Some(ImportColumn::StaffNumber) => &mut index.staff_number,
                Some(ImportColumn::TeacherId) => &mut index.teacher_id,
                Some(ImportColumn::Date) => &mut index.date,
                Some(ImportColumn::Status) => &mut index.status,
                Some(ImportColumn::Remarks) => &mut index.remarks,
                None => continue,
            };
            slot.get_or_insert(i);
        }

        if index.staff_number.is_none() && index.teacher_id.is_none() {
            return Err(ImportParseError::MissingColumn(
                "staffNumber or teacherId".to_string(),
            ));
        }
        Ok(index)
    }
}

/// 表格中的一行原始数据，row_num 为表格中的行号（表头为第 1 行）
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RawRow {
    pub row_num: usize,
    pub staff_number: String,
    pub teacher_id: String,
    pub date: String,
    pub status: String,
    pub remarks: String,
}

/// 根据文件类型读取全部数据行
pub(crate) fn read_rows(data: &[u8], kind: SpreadsheetKind) -> Result<Vec<RawRow>, ImportParseError> {
    let (headers, records) = match kind {
        SpreadsheetKind::Csv => read_csv(data)?,
        SpreadsheetKind::Xlsx => read_xlsx(data)?,
    };
    collect_rows(&headers, records)
}

fn collect_rows(
    headers: &[String],
    records: Vec<Vec<String>>,
) -> Result<Vec<RawRow>, ImportParseError> {
    let index = ColumnIndex::from_headers(headers)?;

    let rows = records
        .into_iter()
        .enumerate()
        // 跳过完全空白的行（表格末尾常见）
        .filter(|(_, cells)| cells.iter().any(|c| !c.trim().is_empty()))
        .map(|(i, cells)| {
            let cell = |idx: Option<usize>| -> String {
                idx.and_then(|i| cells.get(i))
                    .map(|c| c.trim().to_string())
                    .unwrap_or_default()
            };
            RawRow {
                row_num: i + 2,
                staff_number: cell(index.staff_number),
                teacher_id: cell(index.teacher_id),
                date: cell(index.date),
                status: cell(index.status),
                remarks: cell(index.remarks),
            }
        })
        .collect();

    Ok(rows)
}

fn read_csv(data: &[u8]) -> Result<(Vec<String>, Vec<Vec<String>>), ImportParseError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(Cursor::new(data));

    let headers = rdr
        .headers()
        .map_err(|e| ImportParseError::ParseFailed(format!("Failed to read header row: {e}")))?
        .iter()
        // Excel 导出的 CSV 可能带 BOM
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect::<Vec<_>>();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ImportParseError::EmptyFile);
    }

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            ImportParseError::ParseFailed(format!("Failed to parse row {}: {e}", i + 2))
        })?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok((headers, records))
}

fn read_xlsx(data: &[u8]) -> Result<(Vec<String>, Vec<Vec<String>>), ImportParseError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))
        .map_err(|e| ImportParseError::ParseFailed(format!("Failed to open XLSX file: {e}")))?;

    // 只读取第一个工作表
    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = sheet_names
        .first()
        .ok_or_else(|| ImportParseError::ParseFailed("Workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| ImportParseError::ParseFailed(format!("Failed to read worksheet: {e}")))?;

    let mut rows_iter = range.rows();
    let headers = rows_iter
        .next()
        .ok_or(ImportParseError::EmptyFile)?
        .iter()
        .map(cell_text)
        .collect::<Vec<_>>();

    let records = rows_iter
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok((headers, records))
}

// 单元格转文本：日期单元格格式化为 YYYY-MM-DD，整数值去掉小数部分
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| cell.to_string()),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

/// 对照教师名单解析全部行
///
/// 教师按 teacherId 优先、工号其次定位；日期为空时使用 `default_date`；
/// 同一教师同一天在文件中出现多次时以最后一行为准。任一行出错时返回全部行错误。
pub(crate) fn resolve_rows(
    rows: &[RawRow],
    teachers: &[Teacher],
    default_date: NaiveDate,
) -> Result<Vec<NewAttendance>, Vec<ImportRowError>> {
    let mut records = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();
    // (教师, 日期) -> records 中的下标
    let mut seen: HashMap<(i64, String), usize> = HashMap::new();

    for row in rows {
        let row_error = |field: &str, message: String| ImportRowError {
            row: row.row_num,
            field: field.to_string(),
            message,
        };

        let teacher = match resolve_teacher(row, teachers) {
            Ok(teacher) => Some(teacher),
            Err((field, message)) => {
                errors.push(row_error(field, message));
                None
            }
        };

        let date = if row.date.is_empty() {
            Some(default_date)
        } else {
            match parse_date(&row.date) {
                Ok(date) => Some(date),
                Err(msg) => {
                    errors.push(row_error("date", format!("{msg}, got '{}'", row.date)));
                    None
                }
            }
        };

        if row.remarks.chars().count() > REMARKS_MAX {
            errors.push(row_error(
                "remarks",
                format!("Remarks must be at most {REMARKS_MAX} characters"),
            ));
            continue;
        }

        let (Some(teacher), Some(date)) = (teacher, date) else {
            continue;
        };

        let date = date.format(DATE_FORMAT).to_string();
        let record = NewAttendance {
            teacher_id: teacher.id,
            date: date.clone(),
            status: AttendanceStatus::normalize(&row.status),
            remarks: Some(row.remarks.clone()).filter(|r| !r.is_empty()),
        };

        match seen.get(&(teacher.id, date.clone())) {
            Some(&index) => records[index] = record,
            None => {
                seen.insert((teacher.id, date), records.len());
                records.push(record);
            }
        }
    }

    if errors.is_empty() {
        Ok(records)
    } else {
        Err(errors)
    }
}

fn resolve_teacher<'a>(
    row: &RawRow,
    teachers: &'a [Teacher],
) -> Result<&'a Teacher, (&'static str, String)> {
    if !row.teacher_id.is_empty() {
        let id = row
            .teacher_id
            .parse::<i64>()
            .map_err(|_| ("teacherId", format!("Invalid teacher ID '{}'", row.teacher_id)))?;
        return teachers
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ("teacherId", format!("Teacher {id} not found")));
    }

    if !row.staff_number.is_empty() {
        return teachers
            .iter()
            .find(|t| t.staff_number.eq_ignore_ascii_case(&row.staff_number))
            .ok_or_else(|| {
                (
                    "staffNumber",
                    format!("Unknown staff number '{}'", row.staff_number),
                )
            });
    }

    Err((
        "staffNumber",
        "Staff number or teacher ID is required".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(id: i64, staff_number: &str) -> Teacher {
        Teacher {
            id,
            staff_number: staff_number.to_string(),
            first_name: "Test".to_string(),
            last_name: format!("Teacher{id}"),
            email: None,
            phone: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn row(row_num: usize, staff_number: &str, date: &str, status: &str) -> RawRow {
        RawRow {
            row_num,
            staff_number: staff_number.to_string(),
            date: date.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    fn default_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_header_aliases_case_insensitive() {
        let headers = ["StaffNumber", "DATE", "Attendance", "note"]
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        let index = ColumnIndex::from_headers(&headers).unwrap();
        assert_eq!(index.staff_number, Some(0));
        assert_eq!(index.date, Some(1));
        assert_eq!(index.status, Some(2));
        assert_eq!(index.remarks, Some(3));
        assert_eq!(index.teacher_id, None);

        let headers = vec!["staff_no".to_string(), "teacherId".to_string()];
        let index = ColumnIndex::from_headers(&headers).unwrap();
        assert_eq!(index.staff_number, Some(0));
        assert_eq!(index.teacher_id, Some(1));
    }

    #[test]
    fn test_missing_teacher_column() {
        let headers = vec!["date".to_string(), "status".to_string()];
        assert!(matches!(
            ColumnIndex::from_headers(&headers),
            Err(ImportParseError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_read_csv_rows() {
        let csv = "\u{feff}staffNumber,date,status,remarks\nT-001,2025-03-01,A,sick\n,,,\nT-002,,Per,\n";
        let rows = read_rows(csv.as_bytes(), SpreadsheetKind::Csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_num, 2);
        assert_eq!(rows[0].staff_number, "T-001");
        assert_eq!(rows[0].remarks, "sick");
        // 空白行被跳过，但行号保持表格中的位置
        assert_eq!(rows[1].row_num, 4);
        assert_eq!(rows[1].status, "Per");
        assert_eq!(rows[1].date, "");
    }

    #[test]
    fn test_read_csv_without_teacher_column() {
        let csv = "date,status\n2025-03-01,P\n";
        let err = read_rows(csv.as_bytes(), SpreadsheetKind::Csv).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::ImportFileMissingColumn);
    }

    #[test]
    fn test_resolve_rows_normalizes_status_and_dates() {
        let teachers = vec![teacher(1, "T-001"), teacher(2, "T-002")];
        let rows = vec![
            row(2, "T-001", "2025-03-01", "A"),
            row(3, "t-002", "", "Per"),
            RawRow {
                row_num: 4,
                teacher_id: "1".to_string(),
                date: "2025-03-02".to_string(),
                remarks: "late bus".to_string(),
                status: "late".to_string(),
                ..Default::default()
            },
        ];

        let records = resolve_rows(&rows, &teachers, default_date()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].status, AttendanceStatus::Absent);
        assert_eq!(records[0].date, "2025-03-01");
        assert_eq!(records[1].teacher_id, 2);
        assert_eq!(records[1].status, AttendanceStatus::Permission);
        assert_eq!(records[1].date, "2025-03-10");
        assert_eq!(records[1].remarks, None);
        assert_eq!(records[2].status, AttendanceStatus::Late);
        assert_eq!(records[2].remarks.as_deref(), Some("late bus"));
    }

    #[test]
    fn test_resolve_rows_rejects_whole_batch() {
        let teachers = vec![teacher(1, "T-001")];
        let rows = vec![
            row(2, "T-001", "2025-03-01", "P"),
            row(3, "T-404", "2025-03-01", "P"),
            row(4, "T-001", "03/01/2025", "P"),
            row(5, "", "", "P"),
        ];

        let errors = resolve_rows(&rows, &teachers, default_date()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].row, 3);
        assert_eq!(errors[0].field, "staffNumber");
        assert_eq!(errors[1].row, 4);
        assert_eq!(errors[1].field, "date");
        assert_eq!(errors[2].row, 5);
    }

    #[test]
    fn test_resolve_rows_later_duplicate_wins() {
        let teachers = vec![teacher(1, "T-001"), teacher(2, "T-002")];
        let rows = vec![
            row(2, "T-001", "2025-03-01", "P"),
            row(3, "T-002", "2025-03-01", "P"),
            RawRow {
                row_num: 4,
                teacher_id: "1".to_string(),
                date: "2025-03-01".to_string(),
                status: "A".to_string(),
                remarks: "called in sick".to_string(),
                ..Default::default()
            },
        ];

        let records = resolve_rows(&rows, &teachers, default_date()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].teacher_id, 1);
        assert_eq!(records[0].status, AttendanceStatus::Absent);
        assert_eq!(records[0].remarks.as_deref(), Some("called in sick"));
        assert_eq!(records[1].teacher_id, 2);
    }

    #[test]
    fn test_invalid_teacher_id() {
        let teachers = vec![teacher(1, "T-001")];
        let rows = vec![RawRow {
            row_num: 2,
            teacher_id: "abc".to_string(),
            ..Default::default()
        }];
        let errors = resolve_rows(&rows, &teachers, default_date()).unwrap_err();
        assert_eq!(errors[0].field, "teacherId");
    }
}
