//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classes;
mod scheduled_classes;
mod vaults;

use crate::config::DatabaseConfig;
use crate::errors::{ClassVaultError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按给定数据库配置连接并执行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassVaultError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(Self::sqlite_pool_size(url, config.pool_size))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassVaultError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassVaultError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 内存数据库的每个连接都是独立的空库，连接池只能保留一个连接
    fn sqlite_pool_size(url: &str, pool_size: u32) -> u32 {
        if url.contains(":memory:") { 1 } else { pool_size.max(1) }
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassVaultError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    scheduled_classes::{
        entities::ScheduledClass,
        requests::{CreateScheduledClassRequest, UpdateScheduledClassRequest},
    },
    vaults::{
        entities::Vault,
        requests::{CreateVaultRequest, UpdateVaultRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 班级模块
    async fn create_class(&self, class: CreateClassRequest, user_id: i64) -> Result<Class> {
        self.create_class_impl(class, user_id).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 排课模块
    async fn create_scheduled_class(
        &self,
        class_id: i64,
        scheduled: CreateScheduledClassRequest,
        user_id: i64,
    ) -> Result<ScheduledClass> {
        self.create_scheduled_class_impl(class_id, scheduled, user_id)
            .await
    }

    async fn get_scheduled_class_by_id(&self, id: i64) -> Result<Option<ScheduledClass>> {
        self.get_scheduled_class_by_id_impl(id).await
    }

    async fn list_scheduled_classes(&self) -> Result<Vec<ScheduledClass>> {
        self.list_scheduled_classes_impl().await
    }

    async fn update_scheduled_class(
        &self,
        id: i64,
        update: UpdateScheduledClassRequest,
    ) -> Result<Option<ScheduledClass>> {
        self.update_scheduled_class_impl(id, update).await
    }

    async fn delete_scheduled_class(&self, id: i64) -> Result<bool> {
        self.delete_scheduled_class_impl(id).await
    }

    // 密码库模块
    async fn create_vault(&self, class_id: i64, vault: CreateVaultRequest) -> Result<Vault> {
        self.create_vault_impl(class_id, vault).await
    }

    async fn get_vault_by_id(&self, id: i64) -> Result<Option<Vault>> {
        self.get_vault_by_id_impl(id).await
    }

    async fn list_vaults(&self) -> Result<Vec<Vault>> {
        self.list_vaults_impl().await
    }

    async fn list_vaults_by_class(&self, class_id: i64) -> Result<Vec<Vault>> {
        self.list_vaults_by_class_impl(class_id).await
    }

    async fn find_vault_conflicts(
        &self,
        saved_password: Option<&str>,
        website: Option<&str>,
        exclude_id: Option<i64>,
    ) -> Result<Vec<&'static str>> {
        self.find_vault_conflicts_impl(saved_password, website, exclude_id)
            .await
    }

    async fn update_vault(&self, id: i64, update: UpdateVaultRequest) -> Result<Option<Vault>> {
        self.update_vault_impl(id, update).await
    }

    async fn delete_vault(&self, id: i64) -> Result<bool> {
        self.delete_vault_impl(id).await
    }
}
