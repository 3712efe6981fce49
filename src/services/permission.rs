//! 修改权限检查
//!
//! 三类实体的更新与删除共用同一条策略：操作用户是教师或管理员即可。
//! 不检查记录的创建者。

use actix_web::HttpResponse;
use tracing::info;

use crate::models::users::entities::CurrentUser;
use crate::models::{ApiResponse, ErrorCode};

/// 是否允许修改（更新或删除）记录
pub fn can_modify(user: &CurrentUser) -> bool {
    user.is_teacher || user.is_admin
}

/// 权限校验辅助函数，拒绝时不返回任何记录内容
pub(crate) fn check_modify_permission(
    user: &CurrentUser,
    target: &str,
    id: i64,
) -> Result<(), HttpResponse> {
    if can_modify(user) {
        return Ok(());
    }

    info!(
        "Modification of {} {} denied for user {} (teacher: {}, admin: {})",
        target, id, user.id, user.is_teacher, user.is_admin
    );
    Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::PermissionDenied,
        "You do not have permission to modify this record",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_can_modify_truth_table() {
        assert!(!can_modify(&CurrentUser::new(1, "student", false, false)));
        assert!(can_modify(&CurrentUser::new(2, "teacher", true, false)));
        assert!(can_modify(&CurrentUser::new(3, "admin", false, true)));
        assert!(can_modify(&CurrentUser::new(4, "both", true, true)));
    }

    #[test]
    fn test_denied_is_forbidden() {
        let user = CurrentUser::new(1, "student", false, false);
        let resp = check_modify_permission(&user, "class", 9).unwrap_err();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
