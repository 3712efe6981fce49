//! 排课存储操作

use super::SeaOrmStorage;
use crate::entity::scheduled_classes::{ActiveModel, Column, Entity as ScheduledClasses};
use crate::errors::{ClassVaultError, Result};
use crate::models::scheduled_classes::{
    entities::ScheduledClass,
    requests::{CreateScheduledClassRequest, UpdateScheduledClassRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建排课
    pub async fn create_scheduled_class_impl(
        &self,
        class_id: i64,
        req: CreateScheduledClassRequest,
        user_id: i64,
    ) -> Result<ScheduledClass> {
        let model = ActiveModel {
            class_id: Set(class_id),
            teacher: Set(req.teacher),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            start_time: Set(req.start_time),
            active: Set(req.active),
            who_created: Set(Some(user_id)),
            who_modified: Set(Some(user_id)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("创建排课失败: {e}")))?;

        Ok(result.into_scheduled_class())
    }

    /// 通过 ID 获取排课
    pub async fn get_scheduled_class_by_id_impl(&self, id: i64) -> Result<Option<ScheduledClass>> {
        let result = ScheduledClasses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询排课失败: {e}")))?;

        Ok(result.map(|m| m.into_scheduled_class()))
    }

    /// 列出全部排课（按 id 升序）
    pub async fn list_scheduled_classes_impl(&self) -> Result<Vec<ScheduledClass>> {
        let items = ScheduledClasses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询排课列表失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_scheduled_class()).collect())
    }

    /// 更新排课
    pub async fn update_scheduled_class_impl(
        &self,
        id: i64,
        update: UpdateScheduledClassRequest,
    ) -> Result<Option<ScheduledClass>> {
        let existing = ScheduledClasses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("查询排课失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }
        if let Some(teacher) = update.teacher {
            model.teacher = Set(teacher);
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date);
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date);
        }
        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time);
        }
        if let Some(active) = update.active {
            model.active = Set(active);
        }

        if !model.is_changed() {
            return Ok(Some(existing.into_scheduled_class()));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("更新排课失败: {e}")))?;

        Ok(Some(updated.into_scheduled_class()))
    }

    /// 删除排课
    pub async fn delete_scheduled_class_impl(&self, id: i64) -> Result<bool> {
        let result = ScheduledClasses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassVaultError::database_operation(format!("删除排课失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
