use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static STAFF_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9/_-]{1,19}$").expect("Invalid staff number regex"));

static SUBJECT_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9-]{1,11}$").expect("Invalid subject code regex"));

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

// 工号：2-20 位，字母数字开头，可含 / _ -
pub fn validate_staff_number(staff_number: &str) -> Result<(), &'static str> {
    if !STAFF_NUMBER_RE.is_match(staff_number) {
        return Err("Staff number must be 2-20 letters, digits, '/', '_' or '-'");
    }
    Ok(())
}

// 科目代码：大写字母开头，2-12 位
pub fn validate_subject_code(code: &str) -> Result<(), &'static str> {
    if !SUBJECT_CODE_RE.is_match(code) {
        return Err("Subject code must be 2-12 uppercase letters, digits or '-'");
    }
    Ok(())
}

/// 解析 `YYYY-MM-DD` 日期
pub fn parse_date(value: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| "Date must be YYYY-MM-DD")
}

/// 日期统一存为补零的 `YYYY-MM-DD`，保证同一天的字符串比较一致
pub fn normalize_date(value: &str) -> Result<String, &'static str> {
    parse_date(value).map(|d| d.format(DATE_FORMAT).to_string())
}

/// 解析 `HH:MM` 时间，兼容带秒的 `HH:MM:SS`
pub fn parse_time(value: &str) -> Result<NaiveTime, &'static str> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| "Time must be HH:MM")
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
/// - 可选：特殊字符（增强安全性）
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 5. 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("adm").is_err());
        assert!(validate_username("bad name").is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("j.otieno@school.ac.ke").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_staff_number() {
        assert!(validate_staff_number("T-001").is_ok());
        assert!(validate_staff_number("TSC/2291").is_ok());
        assert!(validate_staff_number("T").is_err());
        assert!(validate_staff_number("-T01").is_err());
        assert!(validate_staff_number("T 001").is_err());
    }

    #[test]
    fn test_subject_code() {
        assert!(validate_subject_code("MATH").is_ok());
        assert!(validate_subject_code("ENG-101").is_ok());
        assert!(validate_subject_code("math").is_err());
        assert!(validate_subject_code("M").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-06"),
            Ok(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap())
        );
        assert!(parse_date("06/01/2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date(" 2025-01-06 "), Ok("2025-01-06".to_string()));
        assert!(normalize_date("tomorrow").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("09:30"),
            Ok(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        );
        assert_eq!(
            parse_time("09:30:00"),
            Ok(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        );
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("nine").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_no_uppercase() {
        let result = validate_password("abcd1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );
    }

    #[test]
    fn test_no_lowercase() {
        let result = validate_password("ABCD1234");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one lowercase letter")
        );
    }

    #[test]
    fn test_no_digit() {
        let result = validate_password("AbcdEfgh");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one digit")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }
}
