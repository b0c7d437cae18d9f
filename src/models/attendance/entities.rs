use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Permission,
}

impl AttendanceStatus {
    pub const PRESENT: &'static str = "PRESENT";
    pub const ABSENT: &'static str = "ABSENT";
    pub const LATE: &'static str = "LATE";
    pub const PERMISSION: &'static str = "PERMISSION";

    /// 将表格中的自由文本状态归一化
    ///
    /// 按前缀匹配（不区分大小写）：PER → 请假，P → 出勤，A → 缺勤，L → 迟到，
    /// 其他情况（包括空值）默认为出勤。PER 必须先于 P 判断。
    pub fn normalize(raw: &str) -> Self {
        let value = raw.trim().to_ascii_uppercase();
        if value.starts_with("PER") {
            AttendanceStatus::Permission
        } else if value.starts_with('P') {
            AttendanceStatus::Present
        } else if value.starts_with('A') {
            AttendanceStatus::Absent
        } else if value.starts_with('L') {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "{}", Self::PRESENT),
            AttendanceStatus::Absent => write!(f, "{}", Self::ABSENT),
            AttendanceStatus::Late => write!(f, "{}", Self::LATE),
            AttendanceStatus::Permission => write!(f, "{}", Self::PERMISSION),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PRESENT => Ok(AttendanceStatus::Present),
            Self::ABSENT => Ok(AttendanceStatus::Absent),
            Self::LATE => Ok(AttendanceStatus::Late),
            Self::PERMISSION => Ok(AttendanceStatus::Permission),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 教师考勤记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct TeacherAttendance {
    pub id: i64,
    pub teacher_id: i64,
    pub date: String,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
    pub recorded_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefixes() {
        assert_eq!(AttendanceStatus::normalize("A"), AttendanceStatus::Absent);
        assert_eq!(AttendanceStatus::normalize("Per"), AttendanceStatus::Permission);
        assert_eq!(AttendanceStatus::normalize("permission"), AttendanceStatus::Permission);
        assert_eq!(AttendanceStatus::normalize("present"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::normalize(" late "), AttendanceStatus::Late);
        assert_eq!(AttendanceStatus::normalize("absent"), AttendanceStatus::Absent);
    }

    #[test]
    fn test_normalize_defaults_to_present() {
        assert_eq!(AttendanceStatus::normalize(""), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::normalize("sick"), AttendanceStatus::Present);
        assert_eq!(AttendanceStatus::normalize("?"), AttendanceStatus::Present);
    }

    #[test]
    fn test_serde_uses_upper_case() {
        let json = serde_json::to_string(&AttendanceStatus::Permission).unwrap();
        assert_eq!(json, "\"PERMISSION\"");
        let parsed: AttendanceStatus = serde_json::from_str("\"LATE\"").unwrap();
        assert_eq!(parsed, AttendanceStatus::Late);
    }
}
