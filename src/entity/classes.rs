//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_name: String,
    pub description: String,
    pub expectations: String,
    pub who_created: Option<i64>,
    pub who_modified: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scheduled_classes::Entity")]
    ScheduledClasses,
    #[sea_orm(has_many = "super::vaults::Entity")]
    Vaults,
}

impl Related<super::scheduled_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScheduledClasses.def()
    }
}

impl Related<super::vaults::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vaults.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_class(self) -> crate::models::classes::entities::Class {
        use crate::models::classes::entities::Class;

        Class {
            id: self.id,
            class_name: self.class_name,
            description: self.description,
            expectations: self.expectations,
            who_created: self.who_created,
            who_modified: self.who_modified,
        }
    }
}
