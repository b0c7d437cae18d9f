//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_school_admin_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolAdminError {
            $($variant(String),)*
        }

        impl SchoolAdminError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolAdminError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolAdminError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolAdminError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_admin_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
    ImportParse("E011", "Import Parse Error"),
    Network("E012", "Network Error"),
    RemoteApi("E013", "Remote API Error"),
    Conflict("E014", "Conflict"),
    Constraint("E015", "Constraint Violation"),
}

impl SchoolAdminError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SchoolAdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolAdminError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SchoolAdminError {
    fn from(err: sea_orm::DbErr) -> Self {
        SchoolAdminError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SchoolAdminError {
    fn from(err: std::io::Error) -> Self {
        SchoolAdminError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolAdminError {
    fn from(err: serde_json::Error) -> Self {
        SchoolAdminError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolAdminError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolAdminError::DateParse(err.to_string())
    }
}

impl From<csv::Error> for SchoolAdminError {
    fn from(err: csv::Error) -> Self {
        SchoolAdminError::ImportParse(err.to_string())
    }
}

impl From<calamine::XlsxError> for SchoolAdminError {
    fn from(err: calamine::XlsxError) -> Self {
        SchoolAdminError::ImportParse(err.to_string())
    }
}

// 超时与连接失败统一归为网络错误，客户端据此决定是否回退到本地数据
impl From<reqwest::Error> for SchoolAdminError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            SchoolAdminError::Network(err.to_string())
        } else if err.is_decode() {
            SchoolAdminError::Serialization(err.to_string())
        } else {
            SchoolAdminError::RemoteApi(err.to_string())
        }
    }
}

impl SchoolAdminError {
    /// 是否为网络层错误（离线、超时、连接被拒绝）
    pub fn is_network(&self) -> bool {
        matches!(self, SchoolAdminError::Network(_))
    }
}

pub type Result<T> = std::result::Result<T, SchoolAdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolAdminError::database_config("test").code(), "E001");
        assert_eq!(SchoolAdminError::validation("test").code(), "E005");
        assert_eq!(SchoolAdminError::authentication("test").code(), "E009");
        assert_eq!(SchoolAdminError::network("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolAdminError::import_parse("test").error_type(),
            "Import Parse Error"
        );
        assert_eq!(
            SchoolAdminError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SchoolAdminError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolAdminError::validation("Invalid date");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid date"));
    }

    #[test]
    fn test_network_classification() {
        assert!(SchoolAdminError::network("connection refused").is_network());
        assert!(!SchoolAdminError::remote_api("500").is_network());
    }
}
