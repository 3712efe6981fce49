use super::entities::Class;
use crate::models::vaults::entities::Vault;
use serde::Serialize;

// 班级列表响应
#[derive(Debug, Serialize)]
pub struct ClassListResponse {
    pub items: Vec<Class>,
}

// 班级详情响应，附带该班级下的全部密码库记录
#[derive(Debug, Serialize)]
pub struct ClassDetailResponse {
    pub class: Class,
    pub vaults: Vec<Vault>,
}

// 创建班级表单上下文
#[derive(Debug, Serialize)]
pub struct ClassFormContext {
    pub fields: &'static [&'static str],
}
