use serde::Deserialize;

// 创建密码库请求，class_id 来自路径参数
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVaultRequest {
    #[serde(default)]
    pub saved_password: String,
    #[serde(default)]
    pub website: String,
    pub description: Option<String>,
}

// 更新密码库请求，description 传 null 可清空
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVaultRequest {
    pub saved_password: Option<String>,
    pub website: Option<String>,
    #[serde(default, deserialize_with = "crate::models::common::patch::nullable")]
    pub description: Option<Option<String>>,
    pub class_id: Option<i64>,
}
