use sea_orm::entity::prelude::*;

pub mod constrains {
    pub const PK_CONFIG: &str = "PK_config";
}

pub mod constants {
    pub const START_TIME: &str = "start_time";
    pub const CONTEST_ACTIVE: &str = "contest_active";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "config")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    pub fn find_start_time() -> Select<Entity> {
        Entity::find_by_id(constants::START_TIME)
    }

    pub fn find_contest_active() -> Select<Entity> {
        Entity::find_by_id(constants::CONTEST_ACTIVE)
    }
}
