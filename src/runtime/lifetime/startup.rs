use crate::config::AppConfig;
use crate::errors::{ClassVaultError, Result};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 令牌密钥检查，生产环境不得使用内置的开发密钥
pub fn check_jwt_secret(config: &AppConfig) -> Result<()> {
    if !config.uses_default_jwt_secret() {
        return Ok(());
    }

    if config.is_production() {
        return Err(ClassVaultError::configuration(
            "JWT secret is the built-in development default; set JWT_SECRET in production",
        ));
    }

    warn!("Using the built-in development JWT secret");
    Ok(())
}

/// 准备服务器启动的上下文
/// 包括配置检查、存储初始化与数据库迁移
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    check_jwt_secret(config)?;

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    Ok(StartupContext { storage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_JWT_SECRET;

    fn config_with(environment: &str, secret: Option<&str>) -> AppConfig {
        let mut config = AppConfig::load().expect("default configuration");
        config.app.environment = environment.to_string();
        config.jwt.secret = secret.unwrap_or(DEFAULT_JWT_SECRET).to_string();
        config
    }

    #[test]
    fn test_production_refuses_default_secret() {
        let config = config_with("production", None);
        assert!(config.uses_default_jwt_secret());

        let err = check_jwt_secret(&config).unwrap_err();
        assert_eq!(err.code(), "E010");
    }

    #[tokio::test]
    async fn test_production_startup_fails_before_storage() {
        let mut config = config_with("production", None);
        // 若检查被跳过，这个地址会在连接阶段报出不同的错误
        config.database.url = "unsupported://nowhere".to_string();

        let err = prepare_server_startup(&config).await.err().expect("startup must fail");
        assert!(matches!(err, ClassVaultError::Configuration(_)));
    }

    #[test]
    fn test_custom_secret_accepted_in_production() {
        let config = config_with("production", Some("a-real-deployment-secret"));
        assert!(check_jwt_secret(&config).is_ok());
    }

    #[test]
    fn test_default_secret_allowed_in_development() {
        let config = config_with("development", None);
        assert!(check_jwt_secret(&config).is_ok());
    }
}
