use super::{FieldErrors, require_text};
use crate::models::fee_structures::{entities::FeeComponents, requests::FeeStructureRequest};
use crate::utils::validate::parse_date;

fn component_label(field: &str) -> &'static str {
    match field {
        "tuition_fee" => "Tuition fee",
        "exam_fee" => "Exam fee",
        "lab_fee" => "Lab fee",
        "library_fee" => "Library fee",
        "sports_fee" => "Sports fee",
        "transportation_fee" => "Transportation fee",
        _ => "Other fees",
    }
}

/// 校验收费标准，每个为负的费用项各自报错
pub fn validate_fee_structure(req: &FeeStructureRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "name", &req.name, "Name", 100);

    for (field, amount) in req.components() {
        if !amount.is_finite() {
            errors.add(field, format!("{} must be a number", component_label(field)));
        } else if amount < 0.0 {
            errors.add(
                field,
                format!("{} cannot be negative", component_label(field)),
            );
        }
    }

    if let Err(msg) = parse_date(&req.due_date) {
        errors.add("due_date", msg);
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> FeeStructureRequest {
        FeeStructureRequest {
            name: "Grade 4 Term 1".to_string(),
            classroom_id: None,
            term_id: Some(1),
            academic_year_id: 1,
            tuition_fee: 1500.0,
            exam_fee: 200.0,
            lab_fee: 150.0,
            library_fee: 100.0,
            sports_fee: 100.0,
            transportation_fee: 0.0,
            other_fees: 100.0,
            due_date: "2025-01-31".to_string(),
        }
    }

    #[test]
    fn test_total_amount() {
        let req = request();
        assert!(validate_fee_structure(&req).is_ok());
        assert_eq!(req.total_amount(), 2150.0);

        let req = FeeStructureRequest {
            lab_fee: 100.0,
            library_fee: 50.0,
            sports_fee: 0.0,
            transportation_fee: 300.0,
            other_fees: 0.0,
            ..request()
        };
        assert!(validate_fee_structure(&req).is_ok());
        assert_eq!(req.total_amount(), 2150.0);
    }

    #[test]
    fn test_each_negative_component_flagged() {
        let req = FeeStructureRequest {
            lab_fee: -1.0,
            other_fees: -20.0,
            ..request()
        };
        let err = validate_fee_structure(&req).unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.get("lab_fee"), Some("Lab fee cannot be negative"));
        assert_eq!(err.get("other_fees"), Some("Other fees cannot be negative"));
    }

    #[test]
    fn test_non_finite_component() {
        let req = FeeStructureRequest {
            tuition_fee: f64::NAN,
            ..request()
        };
        let err = validate_fee_structure(&req).unwrap_err();
        assert_eq!(err.get("tuition_fee"), Some("Tuition fee must be a number"));
    }

    #[test]
    fn test_due_date_required() {
        let req = FeeStructureRequest {
            due_date: String::new(),
            ..request()
        };
        assert!(validate_fee_structure(&req).unwrap_err().contains("due_date"));
    }
}
