use super::{FieldErrors, require_text};
use crate::models::attendance::requests::AttendanceRequest;
use crate::models::teachers::requests::TeacherRequest;
use crate::utils::validate::{parse_date, validate_email, validate_staff_number};

fn valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    (7..=15).contains(&digits)
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
}

pub fn validate_teacher(req: &TeacherRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Err(msg) = validate_staff_number(req.staff_number.trim()) {
        errors.add("staff_number", msg);
    }
    require_text(&mut errors, "first_name", &req.first_name, "First name", 100);
    require_text(&mut errors, "last_name", &req.last_name, "Last name", 100);

    if let Some(email) = req.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
        && let Err(msg) = validate_email(email)
    {
        errors.add("email", msg);
    }
    if let Some(phone) = req.phone.as_deref().map(str::trim).filter(|p| !p.is_empty())
        && !valid_phone(phone)
    {
        errors.add("phone", "Phone number format is invalid");
    }

    errors.into_result()
}

pub fn validate_attendance(req: &AttendanceRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Err(msg) = parse_date(&req.date) {
        errors.add("date", msg);
    }
    if let Some(remarks) = &req.remarks
        && remarks.chars().count() > 500
    {
        errors.add("remarks", "Remarks must be at most 500 characters");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;

    fn teacher() -> TeacherRequest {
        TeacherRequest {
            staff_number: "T-001".to_string(),
            first_name: "Joseph".to_string(),
            last_name: "Otieno".to_string(),
            email: Some("j.otieno@school.ac.ke".to_string()),
            phone: Some("+254 712 345678".to_string()),
        }
    }

    #[test]
    fn test_valid_teacher() {
        assert!(validate_teacher(&teacher()).is_ok());
        let req = TeacherRequest {
            email: Some(String::new()),
            phone: None,
            ..teacher()
        };
        assert!(validate_teacher(&req).is_ok());
    }

    #[test]
    fn test_teacher_field_errors() {
        let req = TeacherRequest {
            staff_number: "?".to_string(),
            email: Some("nope".to_string()),
            phone: Some("12".to_string()),
            ..teacher()
        };
        let err = validate_teacher(&req).unwrap_err();
        assert!(err.contains("staff_number"));
        assert!(err.contains("email"));
        assert!(err.contains("phone"));
        assert!(!err.contains("first_name"));
    }

    #[test]
    fn test_attendance_date() {
        let req = AttendanceRequest {
            teacher_id: 1,
            date: "2025-03-03".to_string(),
            status: AttendanceStatus::Late,
            remarks: None,
        };
        assert!(validate_attendance(&req).is_ok());

        let req = AttendanceRequest {
            date: "yesterday".to_string(),
            ..req
        };
        assert!(validate_attendance(&req).unwrap_err().contains("date"));
    }
}
