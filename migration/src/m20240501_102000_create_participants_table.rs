use entity::participants;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(participants::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(participants::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(participants::Column::Name).string().not_null())
                    .col(
                        ColumnDef::new(participants::Column::College)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(participants::Column::SystemNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(participants::Column::Phone)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(participants::Column::LoginTime).string())
                    .col(
                        ColumnDef::new(participants::Column::Submitted)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(participants::Column::SubmitTime).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(participants::Entity).to_owned())
            .await
    }
}
