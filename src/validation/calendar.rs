use super::{FieldErrors, require_text};
use crate::models::academic_years::{entities::AcademicYear, requests::AcademicYearRequest};
use crate::models::terms::{entities::Term, requests::TermRequest};
use crate::utils::validate::parse_date;

pub fn validate_academic_year(req: &AcademicYearRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "name", &req.name, "Name", 50);

    let start = parse_date(&req.start_date);
    let end = parse_date(&req.end_date);
    if let Err(msg) = start {
        errors.add("start_date", msg);
    }
    if let Err(msg) = end {
        errors.add("end_date", msg);
    }
    if let (Ok(start), Ok(end)) = (start, end)
        && start >= end
    {
        errors.add("end_date", "End date must be after start date");
    }

    errors.into_result()
}

/// 修改学年日期时，已有学期仍须落在新的范围内
///
/// 起始日晚于某学期开始时标记 `start_date`，结束日早于某学期结束时标记 `end_date`。
pub fn validate_year_covers_terms(
    req: &AcademicYearRequest,
    terms: &[Term],
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    let (Ok(year_start), Ok(year_end)) = (parse_date(&req.start_date), parse_date(&req.end_date))
    else {
        return Ok(());
    };

    for term in terms {
        if let Ok(start) = parse_date(&term.start_date)
            && start < year_start
        {
            errors.add(
                "start_date",
                format!(
                    "Term {} starts on {}, before the new start date",
                    term.name, term.start_date
                ),
            );
        }
        if let Ok(end) = parse_date(&term.end_date)
            && end > year_end
        {
            errors.add(
                "end_date",
                format!(
                    "Term {} ends on {}, after the new end date",
                    term.name, term.end_date
                ),
            );
        }
    }

    errors.into_result()
}

/// 学期日期必须落在所属学年之内（含首尾两天）
pub fn validate_term(req: &TermRequest, year: &AcademicYear) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "name", &req.name, "Name", 50);

    let start = parse_date(&req.start_date);
    let end = parse_date(&req.end_date);
    if let Err(msg) = start {
        errors.add("start_date", msg);
    }
    if let Err(msg) = end {
        errors.add("end_date", msg);
    }

    if let (Ok(start), Ok(end)) = (start, end)
        && start >= end
    {
        errors.add("end_date", "End date must be after start date");
    }

    // 学年本身日期损坏时无法判断范围
    if let (Ok(year_start), Ok(year_end)) = (parse_date(&year.start_date), parse_date(&year.end_date))
    {
        if let Ok(start) = start
            && (start < year_start || start > year_end)
        {
            errors.add(
                "start_date",
                format!(
                    "Start date must be within the academic year ({} to {})",
                    year.start_date, year.end_date
                ),
            );
        }
        if let Ok(end) = end
            && (end < year_start || end > year_end)
        {
            errors.add(
                "end_date",
                format!(
                    "End date must be within the academic year ({} to {})",
                    year.start_date, year.end_date
                ),
            );
        }
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year() -> AcademicYear {
        AcademicYear {
            id: 1,
            name: "2025".to_string(),
            start_date: "2025-01-06".to_string(),
            end_date: "2025-11-28".to_string(),
            is_current: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn term(start: &str, end: &str) -> TermRequest {
        TermRequest {
            academic_year_id: 1,
            name: "Term 1".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn test_term_within_year() {
        assert!(validate_term(&term("2025-01-06", "2025-04-04"), &year()).is_ok());
        // 首尾两天与学年重合
        assert!(validate_term(&term("2025-01-06", "2025-11-28"), &year()).is_ok());
    }

    #[test]
    fn test_term_outside_year_is_field_scoped() {
        let err = validate_term(&term("2024-12-30", "2025-04-04"), &year()).unwrap_err();
        assert!(err.contains("start_date"));
        assert!(!err.contains("end_date"));

        let err = validate_term(&term("2025-09-01", "2025-12-05"), &year()).unwrap_err();
        assert!(!err.contains("start_date"));
        assert_eq!(
            err.get("end_date"),
            Some("End date must be within the academic year (2025-01-06 to 2025-11-28)")
        );
    }

    #[test]
    fn test_term_start_before_end() {
        let err = validate_term(&term("2025-04-04", "2025-01-06"), &year()).unwrap_err();
        assert_eq!(err.get("end_date"), Some("End date must be after start date"));
    }

    #[test]
    fn test_term_bad_date() {
        let err = validate_term(&term("04/01/2025", "2025-04-04"), &year()).unwrap_err();
        assert_eq!(err.get("start_date"), Some("Date must be YYYY-MM-DD"));
    }

    fn existing_term(start: &str, end: &str) -> Term {
        Term {
            id: 3,
            academic_year_id: 1,
            name: "Term 3".to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_shrinking_year_must_keep_terms() {
        let terms = [existing_term("2025-09-01", "2025-11-28")];
        let shrunk = AcademicYearRequest {
            name: "2025".to_string(),
            start_date: "2025-01-06".to_string(),
            end_date: "2025-06-30".to_string(),
            is_current: true,
        };
        let err = validate_year_covers_terms(&shrunk, &terms).unwrap_err();
        assert!(err.contains("end_date"));
        assert!(!err.contains("start_date"));

        let later_start = AcademicYearRequest {
            start_date: "2025-09-15".to_string(),
            end_date: "2025-12-19".to_string(),
            ..shrunk.clone()
        };
        let err = validate_year_covers_terms(&later_start, &terms).unwrap_err();
        assert!(err.contains("start_date"));

        // 首尾两天与学期重合仍然有效
        let exact = AcademicYearRequest {
            start_date: "2025-09-01".to_string(),
            end_date: "2025-11-28".to_string(),
            ..shrunk
        };
        assert!(validate_year_covers_terms(&exact, &terms).is_ok());
    }

    #[test]
    fn test_academic_year() {
        let ok = AcademicYearRequest {
            name: "2025".to_string(),
            start_date: "2025-01-06".to_string(),
            end_date: "2025-11-28".to_string(),
            is_current: false,
        };
        assert!(validate_academic_year(&ok).is_ok());

        let reversed = AcademicYearRequest {
            start_date: "2025-11-28".to_string(),
            end_date: "2025-01-06".to_string(),
            ..ok.clone()
        };
        assert!(validate_academic_year(&reversed).unwrap_err().contains("end_date"));

        let unnamed = AcademicYearRequest {
            name: " ".to_string(),
            ..ok
        };
        assert!(validate_academic_year(&unnamed).unwrap_err().contains("name"));
    }
}
