use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // bigserial id: the new-claim cursor clients poll against.
        m.create_table(
            Table::create()
                .table(Claim::Table)
                .col(
                    ColumnDef::new(Claim::Id)
                        .big_integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(Claim::ItemId).uuid().not_null())
                .col(ColumnDef::new(Claim::Applicant).string().not_null())
                .col(ColumnDef::new(Claim::AppliedOn).date().not_null())
                .col(ColumnDef::new(Claim::Remarks).string().not_null())
                .col(ColumnDef::new(Claim::Completed).boolean().not_null().default(false))
                .col(ColumnDef::new(Claim::CompletedAt).timestamp_with_time_zone())
                .col(ColumnDef::new(Claim::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Claim::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(Claim::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_claim_item")
                        .from_tbl(Claim::Table)
                        .from_col(Claim::ItemId)
                        .to_tbl(Item::Table)
                        .to_col(Item::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_claim_item")
                .table(Claim::Table)
                .col(Claim::ItemId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Claim::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Claim {
    Table,
    Id,
    ItemId,
    Applicant,
    AppliedOn,
    Remarks,
    Completed,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Item {
    Table,
    Id,
}
