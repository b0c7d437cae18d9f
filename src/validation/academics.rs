use super::{FieldErrors, require_text};
use crate::models::classrooms::requests::ClassroomRequest;
use crate::models::grade_levels::requests::GradeLevelRequest;
use crate::models::subjects::requests::SubjectRequest;
use crate::utils::validate::validate_subject_code;

pub fn validate_grade_level(req: &GradeLevelRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "name", &req.name, "Name", 50);
    if req.level < 1 {
        errors.add("level", "Level must be at least 1");
    }
    errors.into_result()
}

/// 科目代码按大写比较，存储前由服务层统一转换
pub fn validate_subject(req: &SubjectRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "name", &req.name, "Name", 100);
    if let Err(msg) = validate_subject_code(&req.code.trim().to_ascii_uppercase()) {
        errors.add("code", msg);
    }
    if !req.is_core && !req.is_elective {
        errors.add("is_core", "Subject must be marked as core or elective");
    }
    errors.into_result()
}

pub fn validate_classroom(req: &ClassroomRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "name", &req.name, "Name", 50);
    if req.capacity < 1 {
        errors.add("capacity", "Capacity must be at least 1");
    }
    if let Some(room) = &req.room_number
        && room.chars().count() > 20
    {
        errors.add("room_number", "Room number must be at most 20 characters");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(is_core: bool, is_elective: bool) -> SubjectRequest {
        SubjectRequest {
            name: "Mathematics".to_string(),
            code: "math".to_string(),
            description: None,
            is_core,
            is_elective,
        }
    }

    #[test]
    fn test_subject_requires_a_flag() {
        assert!(validate_subject(&subject(true, false)).is_ok());
        assert!(validate_subject(&subject(false, true)).is_ok());
        assert!(validate_subject(&subject(true, true)).is_ok());

        let err = validate_subject(&subject(false, false)).unwrap_err();
        assert_eq!(
            err.get("is_core"),
            Some("Subject must be marked as core or elective")
        );
    }

    #[test]
    fn test_subject_code_format() {
        let req = SubjectRequest {
            code: "M".to_string(),
            ..subject(true, false)
        };
        assert!(validate_subject(&req).unwrap_err().contains("code"));
    }

    #[test]
    fn test_grade_level() {
        let req = GradeLevelRequest {
            name: "Grade 1".to_string(),
            level: 1,
            description: None,
        };
        assert!(validate_grade_level(&req).is_ok());

        let req = GradeLevelRequest { level: 0, ..req };
        assert_eq!(
            validate_grade_level(&req).unwrap_err().get("level"),
            Some("Level must be at least 1")
        );
    }

    #[test]
    fn test_classroom_capacity() {
        let req = ClassroomRequest {
            name: "4 East".to_string(),
            grade_level_id: 1,
            academic_year_id: 1,
            capacity: 40,
            room_number: Some("B12".to_string()),
            class_teacher_id: None,
        };
        assert!(validate_classroom(&req).is_ok());

        let req = ClassroomRequest { capacity: 0, ..req };
        assert!(validate_classroom(&req).unwrap_err().contains("capacity"));
    }
}
