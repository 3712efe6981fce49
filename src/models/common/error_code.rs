use serde::Serialize;

// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    PermissionDenied = 1003,
    NotFound = 1004,
    Conflict = 1005,
    InternalServerError = 1006,

    // 班级 2xxx
    ClassNotFound = 2000,
    ClassCreationFailed = 2001,
    ClassUpdateFailed = 2002,
    ClassDeleteFailed = 2003,

    // 排课 3xxx
    ScheduledClassNotFound = 3000,
    ScheduledClassCreationFailed = 3001,
    ScheduledClassUpdateFailed = 3002,
    ScheduledClassDeleteFailed = 3003,

    // 密码库 4xxx
    VaultNotFound = 4000,
    VaultCreationFailed = 4001,
    VaultUpdateFailed = 4002,
    VaultDeleteFailed = 4003,
    VaultAlreadyExists = 4004,
}
