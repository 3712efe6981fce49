//! 表单校验错误与重定向响应
//!
//! 创建/更新失败时以字段级错误重新呈现表单，成功时返回重定向目标。

use serde::Serialize;
use std::collections::BTreeMap;

/// 字段级错误集合，键为字段名
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// 无错误时返回 Ok，便于在服务层用 `?` 串联
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// 写操作成功后的重定向信息
#[derive(Debug, Clone, Serialize)]
pub struct RedirectResponse<T> {
    pub redirect_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_collect_per_field() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());

        errors.add("website", "This field is required.");
        errors.add("website", "Ensure this value has at most 256 characters.");
        errors.add("saved_password", "This field is required.");

        assert!(errors.contains("website"));
        assert_eq!(errors.get("website").map(|m| m.len()), Some(2));
        assert!(errors.clone().into_result().is_err());

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["saved_password"][0], "This field is required.");
    }

    #[test]
    fn test_empty_field_errors_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
