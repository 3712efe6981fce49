//! 密码库存储操作

use super::SeaOrmStorage;
use crate::entity::vaults::{ActiveModel, Column, Entity as Vaults};
use crate::errors::{ClassVaultError, Result};
use crate::models::vaults::{
    entities::Vault,
    requests::{CreateVaultRequest, UpdateVaultRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, SqlErr,
};

/// 唯一约束冲突映射为 Conflict，其余为数据库操作错误
fn map_vault_write_error(action: &str, e: DbErr) -> ClassVaultError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            ClassVaultError::conflict(format!("{action}失败，唯一字段冲突: {msg}"))
        }
        _ => ClassVaultError::database_operation(format!("{action}失败: {e}")),
    }
}

impl SeaOrmStorage {
    /// 创建密码库记录
    pub async fn create_vault_impl(&self, class_id: i64, req: CreateVaultRequest) -> Result<Vault> {
        let model = ActiveModel {
            saved_password: Set(req.saved_password),
            website: Set(req.website),
            description: Set(req.description),
            class_id: Set(class_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_vault_write_error("创建密码库记录", e))?;

        Ok(result.into_vault())
    }

    /// 通过 ID 获取密码库记录
    pub async fn get_vault_by_id_impl(&self, id: i64) -> Result<Option<Vault>> {
        let result = Vaults::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询密码库记录失败: {e}")))?;

        Ok(result.map(|m| m.into_vault()))
    }

    /// 列出全部密码库记录（按 id 升序）
    pub async fn list_vaults_impl(&self) -> Result<Vec<Vault>> {
        let items = Vaults::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询密码库列表失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_vault()).collect())
    }

    /// 按班级筛选密码库记录
    pub async fn list_vaults_by_class_impl(&self, class_id: i64) -> Result<Vec<Vault>> {
        let items = Vaults::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询班级密码库失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_vault()).collect())
    }

    /// 查找与给定值冲突的唯一字段
    pub async fn find_vault_conflicts_impl(
        &self,
        saved_password: Option<&str>,
        website: Option<&str>,
        exclude_id: Option<i64>,
    ) -> Result<Vec<&'static str>> {
        if saved_password.is_none() && website.is_none() {
            return Ok(Vec::new());
        }

        let mut any = Condition::any();
        if let Some(saved_password) = saved_password {
            any = any.add(Column::SavedPassword.eq(saved_password));
        }
        if let Some(website) = website {
            any = any.add(Column::Website.eq(website));
        }

        let mut select = Vaults::find().filter(any);
        if let Some(exclude_id) = exclude_id {
            select = select.filter(Column::Id.ne(exclude_id));
        }

        let existing = select
            .all(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询密码库冲突失败: {e}")))?;

        let mut fields = Vec::new();
        if saved_password.is_some_and(|v| existing.iter().any(|m| m.saved_password == v)) {
            fields.push("saved_password");
        }
        if website.is_some_and(|v| existing.iter().any(|m| m.website == v)) {
            fields.push("website");
        }
        Ok(fields)
    }

    /// 更新密码库记录
    pub async fn update_vault_impl(
        &self,
        id: i64,
        update: UpdateVaultRequest,
    ) -> Result<Option<Vault>> {
        let existing = Vaults::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询密码库记录失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(saved_password) = update.saved_password {
            model.saved_password = Set(saved_password);
        }
        if let Some(website) = update.website {
            model.website = Set(website);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_vault()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| map_vault_write_error("更新密码库记录", e))?;

        Ok(Some(updated.into_vault()))
    }

    /// 删除密码库记录
    pub async fn delete_vault_impl(&self, id: i64) -> Result<bool> {
        let result = Vaults::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("删除密码库记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
