use super::{FieldErrors, require_text};
use crate::models::exam_results::requests::ExamResultRequest;
use crate::models::exams::{entities::Exam, requests::ExamRequest};
use crate::utils::validate::{parse_date, parse_time};

pub fn validate_exam(req: &ExamRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "name", &req.name, "Name", 100);

    if let Err(msg) = parse_date(&req.exam_date) {
        errors.add("exam_date", msg);
    }

    let start = parse_time(&req.start_time);
    let end = parse_time(&req.end_time);
    if let Err(msg) = start {
        errors.add("start_time", msg);
    }
    if let Err(msg) = end {
        errors.add("end_time", msg);
    }
    if let (Ok(start), Ok(end)) = (start, end)
        && start >= end
    {
        errors.add("end_time", "End time must be after start time");
    }

    if !req.total_marks.is_finite() || req.total_marks <= 0.0 {
        errors.add("total_marks", "Total marks must be greater than 0");
    }
    if !req.passing_marks.is_finite() || req.passing_marks < 0.0 {
        errors.add("passing_marks", "Passing marks cannot be negative");
    } else if req.total_marks.is_finite() && req.passing_marks > req.total_marks {
        errors.add("passing_marks", "Passing marks cannot exceed total marks");
    }

    errors.into_result()
}

/// 分数必须在 0 到该考试满分之间
pub fn validate_exam_result(req: &ExamResultRequest, exam: &Exam) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "student_number", &req.student_number, "Student number", 30);
    require_text(&mut errors, "student_name", &req.student_name, "Student name", 100);

    if !req.marks_obtained.is_finite() || req.marks_obtained < 0.0 {
        errors.add("marks_obtained", "Marks cannot be negative");
    } else if req.marks_obtained > exam.total_marks {
        errors.add(
            "marks_obtained",
            format!("Marks cannot exceed the exam total of {}", exam.total_marks),
        );
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exam_results::entities::ResultStatus;
    use crate::models::exams::entities::ExamType;

    fn exam_request() -> ExamRequest {
        ExamRequest {
            name: "Mid-term Mathematics".to_string(),
            exam_type: ExamType::Midterm,
            subject_id: 1,
            classroom_id: 1,
            term_id: 1,
            exam_date: "2025-03-10".to_string(),
            start_time: "08:00".to_string(),
            end_time: "10:00".to_string(),
            total_marks: 100.0,
            passing_marks: 40.0,
        }
    }

    fn exam() -> Exam {
        let req = exam_request();
        Exam {
            id: 7,
            name: req.name,
            exam_type: req.exam_type,
            subject_id: req.subject_id,
            classroom_id: req.classroom_id,
            term_id: req.term_id,
            exam_date: req.exam_date,
            start_time: req.start_time,
            end_time: req.end_time,
            total_marks: req.total_marks,
            passing_marks: req.passing_marks,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn result(marks: f64) -> ExamResultRequest {
        ExamResultRequest {
            student_number: "S-1001".to_string(),
            student_name: "Amina Wanjiru".to_string(),
            marks_obtained: marks,
            remarks: None,
            status: ResultStatus::Pending,
        }
    }

    #[test]
    fn test_valid_exam() {
        assert!(validate_exam(&exam_request()).is_ok());
    }

    #[test]
    fn test_marks_bounds() {
        let req = ExamRequest {
            total_marks: 0.0,
            ..exam_request()
        };
        assert!(validate_exam(&req).unwrap_err().contains("total_marks"));

        let req = ExamRequest {
            passing_marks: 120.0,
            ..exam_request()
        };
        assert_eq!(
            validate_exam(&req).unwrap_err().get("passing_marks"),
            Some("Passing marks cannot exceed total marks")
        );

        let req = ExamRequest {
            passing_marks: 100.0,
            ..exam_request()
        };
        assert!(validate_exam(&req).is_ok());
    }

    #[test]
    fn test_exam_times() {
        let req = ExamRequest {
            start_time: "10:00".to_string(),
            end_time: "08:00".to_string(),
            ..exam_request()
        };
        assert!(validate_exam(&req).unwrap_err().contains("end_time"));
    }

    #[test]
    fn test_result_marks_within_total() {
        let exam = exam();
        assert!(validate_exam_result(&result(0.0), &exam).is_ok());
        assert!(validate_exam_result(&result(100.0), &exam).is_ok());
        assert!(validate_exam_result(&result(-1.0), &exam).is_err());
        assert_eq!(
            validate_exam_result(&result(100.5), &exam)
                .unwrap_err()
                .get("marks_obtained"),
            Some("Marks cannot exceed the exam total of 100")
        );
    }
}
