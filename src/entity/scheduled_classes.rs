//! 排课实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scheduled_classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub teacher: Option<i64>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub start_time: Option<chrono::NaiveTime>,
    pub active: bool,
    pub who_created: Option<i64>,
    pub who_modified: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id",
        on_delete = "Cascade"
    )]
    Class,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_scheduled_class(
        self,
    ) -> crate::models::scheduled_classes::entities::ScheduledClass {
        use crate::models::scheduled_classes::entities::ScheduledClass;

        ScheduledClass {
            id: self.id,
            class_id: self.class_id,
            teacher: self.teacher,
            start_date: self.start_date,
            end_date: self.end_date,
            start_time: self.start_time,
            active: self.active,
            who_created: self.who_created,
            who_modified: self.who_modified,
        }
    }
}
