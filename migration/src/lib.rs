pub use sea_orm_migration::prelude::*;

mod m20240501_101500_create_config_table;
mod m20240501_102000_create_participants_table;
mod m20240501_102500_create_submissions_table;
mod m20240501_103000_create_solved_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_101500_create_config_table::Migration),
            Box::new(m20240501_102000_create_participants_table::Migration),
            Box::new(m20240501_102500_create_submissions_table::Migration),
            Box::new(m20240501_103000_create_solved_table::Migration),
        ]
    }
}
