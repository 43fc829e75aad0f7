use entity::config::{self, constants::*, constrains::*};
use sea_orm_migration::{
    prelude::*,
    sea_orm::{EntityTrait, Set},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(config::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(config::Column::Key).string().not_null())
                    .col(ColumnDef::new(config::Column::Value).string().not_null())
                    .primary_key(
                        Index::create()
                            .name(PK_CONFIG)
                            .col(config::Column::Key)
                            .primary(),
                    )
                    .to_owned(),
            )
            .await?;

        let start_time = config::ActiveModel {
            key: Set(START_TIME.to_owned()),
            value: Set(String::new()),
        };

        let contest_active = config::ActiveModel {
            key: Set(CONTEST_ACTIVE.to_owned()),
            value: Set("0".to_owned()),
        };

        config::Entity::insert_many([start_time, contest_active])
            .exec_without_returning(manager.get_connection())
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(config::Entity).to_owned())
            .await
    }
}
