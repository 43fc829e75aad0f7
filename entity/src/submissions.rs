use super::{participants, solved};
use sea_orm::entity::prelude::*;

pub mod constrains {
    pub const FK_SUBMISSIONS_PARTICIPANT: &str = "FK_submissions_participant";
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub participant_id: i32,
    pub problem_id: i32,
    pub language: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub code: Option<String>,
    pub passed_all: i32,
    pub wrong_attempts: i32,
    pub first_opened_at: Option<String>,
    pub solved_at: Option<String>,
    pub time_taken_seconds: Option<f64>,
    pub last_updated: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Participant,
    Solved,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Participant => Entity::belongs_to(participants::Entity)
                .from(Column::ParticipantId)
                .to(participants::Column::Id)
                .into(),
            // Matches the solve of the same problem by the same participant, if any.
            Self::Solved => Entity::belongs_to(solved::Entity)
                .from((Column::ParticipantId, Column::ProblemId))
                .to((solved::Column::ParticipantId, solved::Column::ProblemId))
                .into(),
        }
    }
}

impl Related<participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
