use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Singleton counter row (id = 1) backing human-readable item ids
        manager
            .create_table(
                Table::create()
                    .table(ItemSequence::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ItemSequence::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ItemSequence::Value)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        let seed = Query::insert()
            .into_table(ItemSequence::Table)
            .columns([ItemSequence::Id, ItemSequence::Value])
            .values_panic([1.into(), 0.into()])
            .to_owned();

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemSequence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ItemSequence {
    Table,
    Id,
    Value,
}
