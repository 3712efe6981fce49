//! 路径参数提取器
//!
//! 解析并校验路径中的正整数 ID，失败时返回统一的 400 响应。

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::errors::ClassVaultError;

fn parse_positive_id(req: &HttpRequest, name: &str) -> Result<i64, ClassVaultError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| ClassVaultError::validation(format!("Missing path parameter: {name}")))?;

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ClassVaultError::validation(format!(
            "Invalid {name}: must be a positive integer"
        ))),
    }
}

macro_rules! define_safe_id_extractor {
    ($($name:ident => $param:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = ClassVaultError;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    ready(parse_positive_id(req, $param).map($name))
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeIDI64 => "pk",
    SafeClassIdI64 => "class_id",
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parse_positive_id() {
        let req = TestRequest::default()
            .param("pk", "15")
            .param("class_id", "-3")
            .to_http_request();

        assert_eq!(parse_positive_id(&req, "pk").unwrap(), 15);
        assert!(parse_positive_id(&req, "class_id").is_err());
        assert!(parse_positive_id(&req, "missing").is_err());
    }
}
