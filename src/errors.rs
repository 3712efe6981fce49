//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 存储层唯一约束冲突映射为 `Conflict`，与普通 `Validation` 错误区分。

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_class_vault_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassVaultError {
            $($variant(String),)*
        }

        impl ClassVaultError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassVaultError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassVaultError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassVaultError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassVaultError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassVaultError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_class_vault_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    Conflict("E005", "Unique Constraint Conflict"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    Authentication("E008", "Authentication Error"),
    Authorization("E009", "Authorization Error"),
    Configuration("E010", "Configuration Error"),
}

impl ClassVaultError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassVaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassVaultError {}

// 为常见的错误类型实现 From trait
// 唯一约束冲突单独映射为 Conflict，其余数据库错误统一为 DatabaseOperation
impl From<sea_orm::DbErr> for ClassVaultError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => ClassVaultError::Conflict(msg),
            _ => ClassVaultError::DatabaseOperation(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClassVaultError {
    fn from(err: serde_json::Error) -> Self {
        ClassVaultError::Serialization(err.to_string())
    }
}

impl ClassVaultError {
    /// 映射为 HTTP 状态码
    pub fn http_status(&self) -> StatusCode {
        match self {
            ClassVaultError::Validation(_) => StatusCode::BAD_REQUEST,
            ClassVaultError::Conflict(_) => StatusCode::CONFLICT,
            ClassVaultError::NotFound(_) => StatusCode::NOT_FOUND,
            ClassVaultError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ClassVaultError::Authorization(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 对应的 API 错误码
    pub fn api_code(&self) -> ErrorCode {
        match self {
            ClassVaultError::Validation(_) => ErrorCode::ValidationFailed,
            ClassVaultError::Conflict(_) => ErrorCode::Conflict,
            ClassVaultError::NotFound(_) => ErrorCode::NotFound,
            ClassVaultError::Authentication(_) => ErrorCode::Unauthorized,
            ClassVaultError::Authorization(_) => ErrorCode::PermissionDenied,
            _ => ErrorCode::InternalServerError,
        }
    }
}

// 供提取器等直接返回错误的场景使用
impl ResponseError for ClassVaultError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.http_status())
            .json(ApiResponse::error_empty(self.api_code(), self.message()))
    }
}

pub type Result<T> = std::result::Result<T, ClassVaultError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassVaultError::database_config("test").code(), "E001");
        assert_eq!(ClassVaultError::validation("test").code(), "E004");
        assert_eq!(ClassVaultError::conflict("test").code(), "E005");
        assert_eq!(ClassVaultError::authorization("test").code(), "E009");
        assert_eq!(ClassVaultError::configuration("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassVaultError::conflict("test").error_type(),
            "Unique Constraint Conflict"
        );
        assert_eq!(
            ClassVaultError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ClassVaultError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = ClassVaultError::not_found("Vault 7");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Vault 7"));
    }

    #[test]
    fn test_conflict_is_distinct_from_validation() {
        let conflict = ClassVaultError::conflict("vaults.website");
        let invalid = ClassVaultError::validation("website too long");
        assert_eq!(conflict.http_status(), StatusCode::CONFLICT);
        assert_eq!(invalid.http_status(), StatusCode::BAD_REQUEST);
        assert_ne!(conflict.code(), invalid.code());
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ClassVaultError::authorization("x").http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ClassVaultError::authentication("x").http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ClassVaultError::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ClassVaultError::database_operation("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
