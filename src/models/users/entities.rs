use serde::{Deserialize, Serialize};

// 当前请求的操作用户
//
// 用户由外部身份系统签发，这里只保存鉴权需要的能力标记。
// 由 RequireJWT 中间件解析后显式传入各处理函数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub is_teacher: bool,
    pub is_admin: bool,
}

impl CurrentUser {
    pub fn new(id: i64, username: impl Into<String>, is_teacher: bool, is_admin: bool) -> Self {
        Self {
            id,
            username: username.into(),
            is_teacher,
            is_admin,
        }
    }
}
