//! JWT 校验
//!
//! 令牌由外部身份系统使用共享密钥（HS256）签发，本服务只解析并校验，
//! 再把声明转换为 `CurrentUser`。

use crate::config::AppConfig;
use crate::models::users::entities::CurrentUser;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    pub username: String,
    #[serde(default)]
    pub is_teacher: bool,
    #[serde(default)]
    pub is_admin: bool,
    pub exp: usize, // Expiration time (时间戳)
    pub iat: usize, // Issued at (签发时间)
}

impl Claims {
    /// 转换为当前用户
    pub fn into_current_user(self) -> Result<CurrentUser, String> {
        let id = self
            .sub
            .parse::<i64>()
            .map_err(|_| "Invalid user ID in JWT".to_string())?;
        Ok(CurrentUser::new(id, self.username, self.is_teacher, self.is_admin))
    }
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 签发 Access Token（供联调与测试使用）
    pub fn generate_access_token(user: &CurrentUser) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            user,
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        user: &CurrentUser,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            is_teacher: user.is_teacher,
            is_admin: user.is_admin,
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 JWT token
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let decoding_key = DecodingKey::from_secret(config.jwt.secret.as_ref());
        let mut validation = Validation::default();
        validation.leeway = config.jwt.leeway;

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }
}
