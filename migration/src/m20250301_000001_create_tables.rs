use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classes::ClassName).string_len(256).not_null())
                    .col(
                        ColumnDef::new(Classes::Description)
                            .string_len(8000)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Classes::Expectations)
                            .string_len(8000)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Classes::WhoCreated).big_integer().null())
                    .col(ColumnDef::new(Classes::WhoModified).big_integer().null())
                    .to_owned(),
            )
            .await?;

        // 创建排课表
        manager
            .create_table(
                Table::create()
                    .table(ScheduledClasses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduledClasses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScheduledClasses::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScheduledClasses::Teacher).big_integer().null())
                    .col(ColumnDef::new(ScheduledClasses::StartDate).date().null())
                    .col(ColumnDef::new(ScheduledClasses::EndDate).date().null())
                    .col(ColumnDef::new(ScheduledClasses::StartTime).time().null())
                    .col(
                        ColumnDef::new(ScheduledClasses::Active)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ScheduledClasses::WhoCreated)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ScheduledClasses::WhoModified)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ScheduledClasses::Table, ScheduledClasses::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建密码库表，saved_password 与 website 全局唯一
        manager
            .create_table(
                Table::create()
                    .table(Vaults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vaults::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Vaults::SavedPassword)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Vaults::Website)
                            .string_len(256)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Vaults::Description).string_len(8000).null())
                    .col(ColumnDef::new(Vaults::ClassId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Vaults::Table, Vaults::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 外键索引
        manager
            .create_index(
                Index::create()
                    .name("idx_scheduled_classes_class_id")
                    .table(ScheduledClasses::Table)
                    .col(ScheduledClasses::ClassId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vaults_class_id")
                    .table(Vaults::Table)
                    .col(Vaults::ClassId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Vaults::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScheduledClasses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    ClassName,
    Description,
    Expectations,
    WhoCreated,
    WhoModified,
}

#[derive(DeriveIden)]
enum ScheduledClasses {
    #[sea_orm(iden = "scheduled_classes")]
    Table,
    Id,
    ClassId,
    Teacher,
    StartDate,
    EndDate,
    StartTime,
    Active,
    WhoCreated,
    WhoModified,
}

#[derive(DeriveIden)]
enum Vaults {
    #[sea_orm(iden = "vaults")]
    Table,
    Id,
    SavedPassword,
    Website,
    Description,
    ClassId,
}
