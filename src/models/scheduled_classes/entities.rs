use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledClass {
    pub id: i64,
    // 所属班级ID
    pub class_id: i64,
    // 授课教师用户ID
    pub teacher: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub active: bool,
    pub who_created: Option<i64>,
    pub who_modified: Option<i64>,
}
