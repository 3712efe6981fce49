use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub class_name: String,
    // 班级描述
    pub description: String,
    // 课程要求
    pub expectations: String,
    // 创建者用户ID
    pub who_created: Option<i64>,
    // 最后修改者用户ID
    pub who_modified: Option<i64>,
}
