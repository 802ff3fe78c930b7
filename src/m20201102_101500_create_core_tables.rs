use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .col(ColumnDef::new(User::IsDeleted).boolean())
                    .col(ColumnDef::new(User::CreatedOn).date_time())
                    .col(
                        ColumnDef::new(User::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // History tables for the versioned core entities. Each row is one
        // revision of its entity, with the full snapshot in the data payload.
        manager
            .create_table(
                Table::create()
                    .table(ProtocolVersion::Table)
                    .col(ColumnDef::new(ProtocolVersion::UpdatedOn).date_time())
                    .col(
                        ColumnDef::new(ProtocolVersion::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProtocolVersion::Data).json_binary())
                    .col(ColumnDef::new(ProtocolVersion::UpdatedBy).string_len(64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_protocol_version_updated_by")
                            .from(ProtocolVersion::Table, ProtocolVersion::UpdatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RunVersion::Table)
                    .col(ColumnDef::new(RunVersion::UpdatedOn).date_time())
                    .col(
                        ColumnDef::new(RunVersion::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RunVersion::Data).json_binary())
                    .col(ColumnDef::new(RunVersion::UpdatedBy).string_len(64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_run_version_updated_by")
                            .from(RunVersion::Table, RunVersion::UpdatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserVersion::Table)
                    .col(ColumnDef::new(UserVersion::UpdatedOn).date_time())
                    .col(
                        ColumnDef::new(UserVersion::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserVersion::Data).json_binary())
                    .col(ColumnDef::new(UserVersion::UpdatedBy).string_len(64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_version_updated_by")
                            .from(UserVersion::Table, UserVersion::UpdatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserVersion::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(RunVersion::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ProtocolVersion::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    IsDeleted,
    CreatedOn,
}

#[derive(DeriveIden)]
enum ProtocolVersion {
    Table,
    Id,
    UpdatedOn,
    Data,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum RunVersion {
    Table,
    Id,
    UpdatedOn,
    Data,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum UserVersion {
    Table,
    Id,
    UpdatedOn,
    Data,
    UpdatedBy,
}
