use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .col(
                        ColumnDef::new(Item::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Item::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::Brand)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::Color)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::Feature)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::Place)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::Category)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::ImageRef)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::SignatureRef)
                            .string()
                    )
                    .col(
                        ColumnDef::new(Item::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Item::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Item::Table)
                    .to_owned()
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Item {
    Table,
    Id,
    Name,
    Brand,
    Color,
    Feature,
    Place,
    Category,
    ImageRef,
    SignatureRef,
    CreatedAt,
    UpdatedAt,
}
