use entity::{
    participants,
    submissions::{self, constrains::*},
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
                    .table(submissions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(submissions::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::ParticipantId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::ProblemId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(submissions::Column::Language).string())
                    .col(ColumnDef::new(submissions::Column::Code).text())
                    .col(
                        ColumnDef::new(submissions::Column::PassedAll)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::WrongAttempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(submissions::Column::FirstOpenedAt).string())
                    .col(ColumnDef::new(submissions::Column::SolvedAt).string())
                    .col(ColumnDef::new(submissions::Column::TimeTakenSeconds).double())
                    .col(ColumnDef::new(submissions::Column::LastUpdated).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_PARTICIPANT)
                            .from(submissions::Entity, submissions::Column::ParticipantId)
                            .to(participants::Entity, participants::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(submissions::Entity).to_owned())
            .await
    }
}
