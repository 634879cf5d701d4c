use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Email is the primary key: one active passcode per identity,
        // replaced in place by `ON CONFLICT (email) DO UPDATE`.
        manager
            .create_table(
                Table::create()
                    .table(Passcodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Passcodes::Email)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Passcodes::CodeHash).string().not_null())
                    .col(
                        ColumnDef::new(Passcodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Passcodes::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passcodes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Passcodes {
    Table,
    Email,
    CodeHash,
    CreatedAt,
    ExpiresAt,
}
