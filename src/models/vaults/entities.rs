use serde::{Deserialize, Serialize};

/// 密码库记录
///
/// `saved_password` 与 `website` 在所有记录间全局唯一，而非按班级唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    pub id: i64,
    pub saved_password: String,
    pub website: String,
    pub description: Option<String>,
    pub class_id: i64,
}
