pub mod classes;
pub mod locations;
pub mod permission;
pub mod scheduled_classes;
pub mod vaults;

pub use classes::ClassService;
pub use permission::can_modify;
pub use scheduled_classes::ScheduledClassService;
pub use vaults::VaultService;

use actix_web::{HttpResponse, http::StatusCode, http::header::LOCATION};
use serde::Serialize;
use tracing::error;

use crate::errors::ClassVaultError;
use crate::models::{ApiResponse, ErrorCode, FieldErrors, RedirectResponse};

/// 写操作成功：303 重定向到目标位置，响应体同时携带目标与记录
pub(crate) fn see_other<T: Serialize>(
    location: String,
    record: Option<T>,
    message: &str,
) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location.clone()))
        .json(ApiResponse::success(
            RedirectResponse {
                redirect_to: location,
                record,
            },
            message,
        ))
}

/// 表单校验失败：带字段级错误重新呈现表单
pub(crate) fn form_errors(
    status: StatusCode,
    code: ErrorCode,
    errors: FieldErrors,
    message: &str,
) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::error(code, errors, message))
}

pub(crate) fn not_found(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

/// 存储层错误：记录日志并返回 500
pub(crate) fn storage_failure(code: ErrorCode, context: &str, e: &ClassVaultError) -> HttpResponse {
    error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(code, context))
}
