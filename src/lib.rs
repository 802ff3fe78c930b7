pub use sea_orm_migration::prelude::*;

mod m20201102_101500_create_core_tables;
mod m20201221_211703_add_samples_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20201102_101500_create_core_tables::Migration),
            Box::new(m20201221_211703_add_samples_table::Migration),
        ]
    }
}
