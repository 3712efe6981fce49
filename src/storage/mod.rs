use std::sync::Arc;

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

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod sea_orm_storage;

/// 实体存储
///
/// 列表查询统一按 id 升序返回。写入违反唯一约束时返回
/// `ClassVaultError::Conflict`，与字段校验错误区分。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 班级管理方法
    // 创建班级，who_created/who_modified 记为操作用户
    async fn create_class(&self, class: CreateClassRequest, user_id: i64) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 列出全部班级
    async fn list_classes(&self) -> Result<Vec<Class>>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>>;
    // 删除班级，级联删除其排课与密码库记录
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 排课管理方法
    // 在指定班级下创建排课
    async fn create_scheduled_class(
        &self,
        class_id: i64,
        scheduled: CreateScheduledClassRequest,
        user_id: i64,
    ) -> Result<ScheduledClass>;
    // 通过ID获取排课
    async fn get_scheduled_class_by_id(&self, id: i64) -> Result<Option<ScheduledClass>>;
    // 列出全部排课
    async fn list_scheduled_classes(&self) -> Result<Vec<ScheduledClass>>;
    // 更新排课
    async fn update_scheduled_class(
        &self,
        id: i64,
        update: UpdateScheduledClassRequest,
    ) -> Result<Option<ScheduledClass>>;
    // 删除排课
    async fn delete_scheduled_class(&self, id: i64) -> Result<bool>;

    /// 密码库管理方法
    // 在指定班级下创建密码库记录
    async fn create_vault(&self, class_id: i64, vault: CreateVaultRequest) -> Result<Vault>;
    // 通过ID获取密码库记录
    async fn get_vault_by_id(&self, id: i64) -> Result<Option<Vault>>;
    // 列出全部密码库记录
    async fn list_vaults(&self) -> Result<Vec<Vault>>;
    // 按班级筛选密码库记录
    async fn list_vaults_by_class(&self, class_id: i64) -> Result<Vec<Vault>>;
    // 查找与给定值冲突的唯一字段（排除自身 id）
    async fn find_vault_conflicts(
        &self,
        saved_password: Option<&str>,
        website: Option<&str>,
        exclude_id: Option<i64>,
    ) -> Result<Vec<&'static str>>;
    // 更新密码库记录
    async fn update_vault(&self, id: i64, update: UpdateVaultRequest) -> Result<Option<Vault>>;
    // 删除密码库记录
    async fn delete_vault(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
