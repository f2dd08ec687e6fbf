use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Items::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Items::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Items::Seq)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Items::HumanId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Items::Name).text().not_null())
                    .col(ColumnDef::new(Items::Category).text().not_null())
                    .col(ColumnDef::new(Items::Thickness).text().not_null())
                    .col(ColumnDef::new(Items::Side).text().not_null())
                    .col(ColumnDef::new(Items::Lamination).text().not_null())
                    .col(ColumnDef::new(Items::Size).text().not_null())
                    .col(ColumnDef::new(Items::Price).double().not_null())
                    .col(ColumnDef::new(Items::Description).text().not_null())
                    // JSON array of image URLs
                    .col(ColumnDef::new(Items::ImageUrls).text().not_null())
                    .col(ColumnDef::new(Items::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Items::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_items_created_at")
                    .table(Items::Table)
                    .col(Items::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Items::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Items {
    Table,
    Id,
    Seq,
    HumanId,
    Name,
    Category,
    Thickness,
    Side,
    Lamination,
    Size,
    Price,
    Description,
    ImageUrls,
    CreatedAt,
    UpdatedAt,
}
