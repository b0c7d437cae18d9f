// 业务错误码，随 ApiResponse.code 返回给前端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1005,
    ReferenceNotFound = 1006,
    ReferenceInUse = 1007,
    InternalServerError = 1099,

    // 认证
    AuthFailed = 2000,

    // 学年 / 学期 / 课时
    AcademicYearNotFound = 3000,
    TermNotFound = 3100,
    PeriodNotFound = 3200,
    PeriodOverlap = 3201,

    // 年级 / 科目 / 班级
    GradeLevelNotFound = 4000,
    SubjectNotFound = 4100,
    ClassroomNotFound = 4200,

    // 教师与考勤
    TeacherNotFound = 5000,
    AttendanceNotFound = 5100,

    // 考试与成绩
    ExamNotFound = 6000,
    ExamResultNotFound = 6100,

    // 通知
    NotificationNotFound = 7000,

    // 收费
    FeeStructureNotFound = 8000,

    // 导入
    FileUploadFailed = 9000,
    FileTypeNotAllowed = 9001,
    FileSizeExceeded = 9002,
    ImportFileParseFailed = 9100,
    ImportFileMissingColumn = 9101,
    ImportFileDataInvalid = 9102,
}

impl ErrorCode {
    /// 从响应中的数字错误码还原
    pub fn from_code(code: i32) -> Option<Self> {
        use ErrorCode::*;
        let all = [
            Success,
            BadRequest,
            ValidationFailed,
            Unauthorized,
            Forbidden,
            NotFound,
            Conflict,
            ReferenceNotFound,
            ReferenceInUse,
            InternalServerError,
            AuthFailed,
            AcademicYearNotFound,
            TermNotFound,
            PeriodNotFound,
            PeriodOverlap,
            GradeLevelNotFound,
            SubjectNotFound,
            ClassroomNotFound,
            TeacherNotFound,
            AttendanceNotFound,
            ExamNotFound,
            ExamResultNotFound,
            NotificationNotFound,
            FeeStructureNotFound,
            FileUploadFailed,
            FileTypeNotAllowed,
            FileSizeExceeded,
            ImportFileParseFailed,
            ImportFileMissingColumn,
            ImportFileDataInvalid,
        ];
        all.into_iter().find(|c| *c as i32 == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrip_known_codes() {
        assert_eq!(ErrorCode::from_code(0), Some(ErrorCode::Success));
        assert_eq!(ErrorCode::from_code(3201), Some(ErrorCode::PeriodOverlap));
        assert_eq!(
            ErrorCode::from_code(9102),
            Some(ErrorCode::ImportFileDataInvalid)
        );
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(ErrorCode::from_code(-1), None);
        assert_eq!(ErrorCode::from_code(4242), None);
    }
}
