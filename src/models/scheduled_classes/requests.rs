use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

// 创建排课请求，class_id 来自路径参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateScheduledClassRequest {
    pub teacher: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub active: bool,
}

// 更新排课请求，允许改挂到其它班级；可空字段传 null 可清空
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScheduledClassRequest {
    pub class_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::common::patch::nullable")]
    pub teacher: Option<Option<i64>>,
    #[serde(default, deserialize_with = "crate::models::common::patch::nullable")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "crate::models::common::patch::nullable")]
    pub end_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "crate::models::common::patch::nullable")]
    pub start_time: Option<Option<NaiveTime>>,
    pub active: Option<bool>,
}
