use serde::Deserialize;

// 创建班级请求
//
// who_created / who_modified 不由客户端提交，服务层使用当前用户填充。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expectations: String,
}

// 更新班级请求，未提供的字段保持不变
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClassRequest {
    pub class_name: Option<String>,
    pub description: Option<String>,
    pub expectations: Option<String>,
}
