pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_items;
mod m20250301_000002_create_item_sequence;

pub struct ItemMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ItemMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_items::Migration),
            Box::new(m20250301_000002_create_item_sequence::Migration),
        ]
    }
}
