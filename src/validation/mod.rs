//! 表单校验
//!
//! 服务层在写入前调用这里的纯函数。每个函数返回按字段归类的错误，
//! 由服务层统一转成 400 + `ValidationFailed` 响应。

mod academics;
mod calendar;
mod exams;
mod fees;
mod notifications;
mod periods;
mod staff;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use academics::{validate_classroom, validate_grade_level, validate_subject};
pub use calendar::{validate_academic_year, validate_term, validate_year_covers_terms};
pub use exams::{validate_exam, validate_exam_result};
pub use fees::validate_fee_structure;
pub use notifications::validate_notification;
pub use periods::{OVERLAP_MESSAGE, find_overlap, intervals_overlap, validate_period};
pub use staff::{validate_attendance, validate_teacher};

/// 字段名 -> 错误信息
///
/// 同一字段只保留第一条错误，与表单逐项提示的行为一致。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn contains_message(&self, fragment: &str) -> bool {
        self.0.values().any(|m| m.contains(fragment))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// 单行摘要，用作响应的 message
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

// 必填文本字段：去除首尾空白后非空且不超过上限
pub(crate) fn require_text(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    label: &str,
    max_len: usize,
) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, format!("{label} is required"));
    } else if trimmed.chars().count() > max_len {
        errors.add(
            field,
            format!("{label} must be at most {max_len} characters"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins() {
        let mut errors = FieldErrors::new();
        errors.add("name", "Name is required");
        errors.add("name", "Name is too long");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.add("end_date", "End date must be after start date");
        let err = errors.into_result().unwrap_err();
        assert!(err.contains("end_date"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.add("tuition_fee", "Tuition fee cannot be negative");
        errors.add("due_date", "Date must be YYYY-MM-DD");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "due_date": "Date must be YYYY-MM-DD",
                "tuition_fee": "Tuition fee cannot be negative"
            })
        );
        assert_eq!(
            errors.summary(),
            "due_date: Date must be YYYY-MM-DD; tuition_fee: Tuition fee cannot be negative"
        );
    }

    #[test]
    fn test_require_text() {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "title", "   ", "Title", 10);
        require_text(&mut errors, "message", "a very long message", "Message", 10);
        require_text(&mut errors, "name", "ok", "Name", 10);
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(
            errors.get("message"),
            Some("Message must be at most 10 characters")
        );
        assert!(!errors.contains("name"));
    }
}
