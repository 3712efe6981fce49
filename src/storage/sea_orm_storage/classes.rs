//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::scheduled_classes::{
    Column as ScheduledClassColumn, Entity as ScheduledClasses,
};
use crate::entity::vaults::{Column as VaultColumn, Entity as Vaults};
use crate::errors::{ClassVaultError, Result};
use crate::models::classes::{
    entities::Class,
    requests::{CreateClassRequest, UpdateClassRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest, user_id: i64) -> Result<Class> {
        let model = ActiveModel {
            class_name: Set(req.class_name),
            description: Set(req.description),
            expectations: Set(req.expectations),
            who_created: Set(Some(user_id)),
            who_modified: Set(Some(user_id)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出全部班级（按 id 升序）
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let existing = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询班级失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name);
        }

        if let Some(description) = update.description {
            model.description = Set(description);
        }

        if let Some(expectations) = update.expectations {
            model.expectations = Set(expectations);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_class()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("更新班级失败: {e}")))?;

        Ok(Some(updated.into_class()))
    }

    /// 删除班级
    ///
    /// 在同一事务内先删除该班级的密码库与排课记录，不依赖数据库是否启用外键级联。
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("开启事务失败: {e}")))?;

        Vaults::delete_many()
            .filter(VaultColumn::ClassId.eq(class_id))
            .exec(&txn)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("删除班级密码库失败: {e}")))?;

        ScheduledClasses::delete_many()
            .filter(ScheduledClassColumn::ClassId.eq(class_id))
            .exec(&txn)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("删除班级排课失败: {e}")))?;

        let result = Classes::delete_by_id(class_id)
            .exec(&txn)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("删除班级失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
