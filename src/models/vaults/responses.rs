use super::entities::Vault;
use serde::Serialize;

// 密码库列表响应
#[derive(Debug, Serialize)]
pub struct VaultListResponse {
    pub items: Vec<Vault>,
}

// 创建密码库表单上下文
#[derive(Debug, Serialize)]
pub struct VaultFormContext {
    pub class_id: i64,
    pub class_name: String,
}
