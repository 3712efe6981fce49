use super::entities::ScheduledClass;
use serde::Serialize;

// 排课列表响应
#[derive(Debug, Serialize)]
pub struct ScheduledClassListResponse {
    pub items: Vec<ScheduledClass>,
}

// 创建排课表单上下文，展示所属班级名称
#[derive(Debug, Serialize)]
pub struct ScheduledClassFormContext {
    pub class_id: i64,
    pub class_name: String,
}
