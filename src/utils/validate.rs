//! 表单字段校验
//!
//! 长度按字符数计算。错误信息写入 `FieldErrors`，由服务层整体返回。

use chrono::NaiveDate;

use crate::models::FieldErrors;

pub const NAME_MAX_LENGTH: usize = 256;
pub const TEXT_MAX_LENGTH: usize = 8000;

pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// 必填且限制最大长度
pub fn require_text(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED_MESSAGE);
    } else {
        check_max_length(errors, field, value, max);
    }
}

/// 仅限制最大长度
pub fn check_max_length(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.add(
            field,
            format!("Ensure this value has at most {max} characters (it has {len})."),
        );
    }
}

/// 结束日期不得早于开始日期
pub fn check_date_range(
    errors: &mut FieldErrors,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) {
    if let (Some(start), Some(end)) = (start_date, end_date)
        && end < start
    {
        errors.add("end_date", "End date must not be before start date.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_blank() {
        let mut errors = FieldErrors::new();
        require_text(&mut errors, "website", "   ", NAME_MAX_LENGTH);
        assert_eq!(errors.get("website"), Some(&[REQUIRED_MESSAGE.to_string()][..]));
    }

    #[test]
    fn test_max_length_counts_chars() {
        let mut errors = FieldErrors::new();
        // 256 个多字节字符不超限
        check_max_length(&mut errors, "website", &"密".repeat(256), NAME_MAX_LENGTH);
        assert!(errors.is_empty());

        check_max_length(&mut errors, "website", &"a".repeat(257), NAME_MAX_LENGTH);
        assert!(errors.contains("website"));
    }

    #[test]
    fn test_date_range() {
        let mut errors = FieldErrors::new();
        let d = |day| NaiveDate::from_ymd_opt(2025, 1, day);
        check_date_range(&mut errors, d(10), d(10));
        check_date_range(&mut errors, d(10), None);
        assert!(errors.is_empty());

        check_date_range(&mut errors, d(10), d(9));
        assert!(errors.contains("end_date"));
    }
}
