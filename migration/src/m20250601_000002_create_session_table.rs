use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Session::Table)
                .col(ColumnDef::new(Session::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Session::UserId).uuid().not_null())
                .col(ColumnDef::new(Session::AccessHash).string().not_null())
                .col(ColumnDef::new(Session::RefreshHash).string().not_null())
                .col(ColumnDef::new(Session::AccessExpiresAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Session::RefreshExpiresAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Session::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        m.alter_table(
            Table::alter()
                .table(Session::Table)
                .add_foreign_key(
                    TableForeignKey::new()
                        .name("fk_session_user")
                        .from_tbl(Session::Table)
                        .from_col(Session::UserId)
                        .to_tbl(User::Table)
                        .to_col(User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_session_user")
                .table(Session::Table)
                .col(Session::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Session::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Session {
    Table,
    Id,
    UserId,
    AccessHash,
    RefreshHash,
    AccessExpiresAt,
    RefreshExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
