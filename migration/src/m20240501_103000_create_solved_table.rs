use entity::{
    participants,
    solved::{self, constrains::*},
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(solved::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(solved::Column::ParticipantId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(solved::Column::ProblemId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name(PK_SOLVED)
                            .col(solved::Column::ParticipantId)
                            .col(solved::Column::ProblemId)
                            .primary(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SOLVED_PARTICIPANT)
                            .from(solved::Entity, solved::Column::ParticipantId)
                            .to(participants::Entity, participants::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(solved::Entity).to_owned())
            .await
    }
}
