use chrono::NaiveTime;

use super::{FieldErrors, require_text};
use crate::models::periods::{entities::Period, requests::PeriodRequest};
use crate::utils::validate::parse_time;

pub const OVERLAP_MESSAGE: &str = "overlaps with an existing period";

/// 判断候选区间 [start, end) 与已有区间 [p_start, p_end) 是否重叠
///
/// 满足任一条件即视为重叠：
/// - start 落在 [p_start, p_end)
/// - end 落在 (p_start, p_end]
/// - 候选区间完全覆盖已有区间
///
/// 首尾相接（一个的结束等于另一个的开始）不算重叠。
pub fn intervals_overlap(
    start: NaiveTime,
    end: NaiveTime,
    p_start: NaiveTime,
    p_end: NaiveTime,
) -> bool {
    (start >= p_start && start < p_end)
        || (end > p_start && end <= p_end)
        || (start <= p_start && end >= p_end)
}

/// 在已有课时中查找与候选区间冲突的第一项，`exclude_id` 为正在编辑的课时
///
/// 已有课时的时间无法解析时跳过，不阻塞新的录入。
pub fn find_overlap<'a>(
    start: NaiveTime,
    end: NaiveTime,
    existing: &'a [Period],
    exclude_id: Option<i64>,
) -> Option<&'a Period> {
    existing
        .iter()
        .filter(|p| Some(p.id) != exclude_id)
        .find(|p| match (parse_time(&p.start_time), parse_time(&p.end_time)) {
            (Ok(p_start), Ok(p_end)) => intervals_overlap(start, end, p_start, p_end),
            _ => false,
        })
}

pub fn validate_period(
    req: &PeriodRequest,
    existing: &[Period],
    exclude_id: Option<i64>,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    require_text(&mut errors, "name", &req.name, "Name", 50);

    let start = parse_time(&req.start_time);
    let end = parse_time(&req.end_time);
    if let Err(msg) = start {
        errors.add("start_time", msg);
    }
    if let Err(msg) = end {
        errors.add("end_time", msg);
    }

    if let (Ok(start), Ok(end)) = (start, end) {
        if start >= end {
            errors.add("end_time", "End time must be after start time");
        } else if let Some(conflict) = find_overlap(start, end, existing, exclude_id) {
            errors.add(
                "start_time",
                format!(
                    "Time slot {OVERLAP_MESSAGE}: {} ({}-{})",
                    conflict.name, conflict.start_time, conflict.end_time
                ),
            );
        }
    }

    if req.sort_order < 0 {
        errors.add("sort_order", "Sort order cannot be negative");
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: &str) -> NaiveTime {
        parse_time(value).unwrap()
    }

    fn period(id: i64, name: &str, start: &str, end: &str) -> Period {
        Period {
            id,
            name: name.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            sort_order: id as i32,
            is_break: false,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn request(start: &str, end: &str) -> PeriodRequest {
        PeriodRequest {
            name: "Period".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            sort_order: 0,
            is_break: false,
        }
    }

    #[test]
    fn test_partial_overlap_rejected() {
        let existing = vec![period(1, "Period 1", "09:00", "10:00")];
        let err = validate_period(&request("09:30", "10:30"), &existing, None).unwrap_err();
        let message = err.get("start_time").unwrap();
        assert!(message.contains(OVERLAP_MESSAGE));
        assert!(message.contains("Period 1"));
    }

    #[test]
    fn test_overlap_cases() {
        let (ps, pe) = (t("09:00"), t("10:00"));
        // 起点在区间内
        assert!(intervals_overlap(t("09:30"), t("10:30"), ps, pe));
        // 终点在区间内
        assert!(intervals_overlap(t("08:30"), t("09:30"), ps, pe));
        // 完全覆盖
        assert!(intervals_overlap(t("08:00"), t("11:00"), ps, pe));
        // 完全包含
        assert!(intervals_overlap(t("09:15"), t("09:45"), ps, pe));
        // 完全相同
        assert!(intervals_overlap(t("09:00"), t("10:00"), ps, pe));
        // 首尾相接
        assert!(!intervals_overlap(t("10:00"), t("11:00"), ps, pe));
        assert!(!intervals_overlap(t("08:00"), t("09:00"), ps, pe));
        // 完全分离
        assert!(!intervals_overlap(t("13:00"), t("14:00"), ps, pe));
    }

    #[test]
    fn test_overlap_matches_half_open_intersection() {
        let slots = ["08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00"];
        let (ps, pe) = (t("09:00"), t("10:00"));
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                let (s, e) = (t(a), t(b));
                assert_eq!(
                    intervals_overlap(s, e, ps, pe),
                    s < pe && e > ps,
                    "{a}-{b}"
                );
            }
        }
    }

    #[test]
    fn test_adjacent_periods_accepted() {
        let existing = vec![
            period(1, "Period 1", "08:00", "09:00"),
            period(2, "Period 2", "10:00", "11:00"),
        ];
        assert!(validate_period(&request("09:00", "10:00"), &existing, None).is_ok());
    }

    #[test]
    fn test_editing_excludes_itself() {
        let existing = vec![
            period(1, "Period 1", "08:00", "09:00"),
            period(2, "Period 2", "09:00", "10:00"),
        ];
        assert!(validate_period(&request("09:00", "09:50"), &existing, Some(2)).is_ok());
        assert!(validate_period(&request("08:50", "09:50"), &existing, Some(2)).is_err());
    }

    #[test]
    fn test_start_must_precede_end() {
        let err = validate_period(&request("10:00", "10:00"), &[], None).unwrap_err();
        assert_eq!(err.get("end_time"), Some("End time must be after start time"));

        let err = validate_period(&request("11:00", "10:00"), &[], None).unwrap_err();
        assert!(err.contains("end_time"));
    }

    #[test]
    fn test_unparseable_times() {
        let err = validate_period(&request("9am", "25:00"), &[], None).unwrap_err();
        assert!(err.contains("start_time"));
        assert!(err.contains("end_time"));
    }

    #[test]
    fn test_corrupt_existing_period_skipped() {
        let existing = vec![period(1, "Legacy", "morning", "noon")];
        assert!(validate_period(&request("09:00", "10:00"), &existing, None).is_ok());
    }
}
