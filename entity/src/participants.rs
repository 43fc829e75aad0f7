use super::{solved, submissions};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "participants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub college: String,
    pub system_number: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub login_time: Option<String>,
    #[sea_orm(default_value = 0)]
    pub submitted: i32,
    pub submit_time: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
    #[sea_orm(has_many = "super::solved::Entity")]
    Solved,
}

impl Related<submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl Related<solved::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Solved.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
