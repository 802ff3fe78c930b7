use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    #[allow(clippy::too_many_lines)] // Versioned sample schema requires extensive table definitions
    #[allow(clippy::match_wildcard_for_single_variants)] // Wildcard matches for unsupported databases are semantically correct
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create the sample table, identified by (sample_id, plate_id,
        // run_version_id, protocol_version_id)
        let mut sample_table = Table::create()
            .table(Sample::Table)
            .col(ColumnDef::new(Sample::IsDeleted).boolean())
            .col(ColumnDef::new(Sample::CreatedOn).date_time())
            .col(ColumnDef::new(Sample::SampleId).string_len(64).not_null())
            .col(ColumnDef::new(Sample::PlateId).string_len(64).not_null())
            .col(ColumnDef::new(Sample::RunVersionId).integer().not_null())
            .col(
                ColumnDef::new(Sample::ProtocolVersionId)
                    .integer()
                    .not_null(),
            )
            .col(ColumnDef::new(Sample::VersionId).integer())
            .col(ColumnDef::new(Sample::CreatedBy).string_len(64))
            .primary_key(
                Index::create()
                    .col(Sample::SampleId)
                    .col(Sample::PlateId)
                    .col(Sample::RunVersionId)
                    .col(Sample::ProtocolVersionId),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_sample_created_by")
                    .from(Sample::Table, Sample::CreatedBy)
                    .to(User::Table, User::Id)
                    .on_delete(ForeignKeyAction::NoAction)
                    .on_update(ForeignKeyAction::NoAction),
            )
            .to_owned();

        // sample references sample_version (current revision pointer) while
        // sample_version references sample, so the remaining constraints cannot
        // all exist at creation time. Postgres adds them by ALTER once both
        // tables are in place; SQLite cannot add constraints by ALTER but only
        // resolves references at insert time, so there they are declared inline.
        match manager.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => {}
            sea_orm::DatabaseBackend::Sqlite => {
                sample_table
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sample_protocol_version_id")
                            .from(Sample::Table, Sample::ProtocolVersionId)
                            .to(ProtocolVersion::Table, ProtocolVersion::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sample_run_version_id")
                            .from(Sample::Table, Sample::RunVersionId)
                            .to(RunVersion::Table, RunVersion::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sample_version_id")
                            .from(Sample::Table, Sample::VersionId)
                            .to(SampleVersion::Table, SampleVersion::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    );
            }
            _ => {
                return Err(DbErr::Custom("Unsupported database backend".to_string()));
            }
        }

        manager.create_table(sample_table).await?;

        // Create the sample_version history table, one row per revision of a
        // sample, with the snapshot in the data payload
        manager
            .create_table(
                Table::create()
                    .table(SampleVersion::Table)
                    .col(ColumnDef::new(SampleVersion::ServerVersion).string_len(40))
                    .col(ColumnDef::new(SampleVersion::WebappVersion).string_len(40))
                    .col(ColumnDef::new(SampleVersion::UpdatedOn).date_time())
                    .col(
                        ColumnDef::new(SampleVersion::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SampleVersion::SampleId).string_len(64))
                    .col(ColumnDef::new(SampleVersion::PlateId).string_len(64))
                    .col(ColumnDef::new(SampleVersion::RunVersionId).integer())
                    .col(ColumnDef::new(SampleVersion::ProtocolVersionId).integer())
                    .col(ColumnDef::new(SampleVersion::Data).json_binary())
                    .col(ColumnDef::new(SampleVersion::UpdatedBy).string_len(64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sample_version_sample")
                            .from_tbl(SampleVersion::Table)
                            .from_col(SampleVersion::SampleId)
                            .from_col(SampleVersion::PlateId)
                            .from_col(SampleVersion::RunVersionId)
                            .from_col(SampleVersion::ProtocolVersionId)
                            .to_tbl(Sample::Table)
                            .to_col(Sample::SampleId)
                            .to_col(Sample::PlateId)
                            .to_col(Sample::RunVersionId)
                            .to_col(Sample::ProtocolVersionId)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sample_version_updated_by")
                            .from(SampleVersion::Table, SampleVersion::UpdatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Add build provenance columns to the existing version tables
        // (SQLite requires separate ALTER statements)
        manager
            .alter_table(
                Table::alter()
                    .table(ProtocolVersion::Table)
                    .add_column(ColumnDef::new(ProtocolVersion::ServerVersion).string_len(40))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(ProtocolVersion::Table)
                    .add_column(ColumnDef::new(ProtocolVersion::WebappVersion).string_len(40))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(RunVersion::Table)
                    .add_column(ColumnDef::new(RunVersion::ServerVersion).string_len(40))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(RunVersion::Table)
                    .add_column(ColumnDef::new(RunVersion::WebappVersion).string_len(40))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(UserVersion::Table)
                    .add_column(ColumnDef::new(UserVersion::ServerVersion).string_len(40))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(UserVersion::Table)
                    .add_column(ColumnDef::new(UserVersion::WebappVersion).string_len(40))
                    .to_owned(),
            )
            .await?;

        // Now that sample_version exists, close the reference cycle
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name("fk_sample_protocol_version_id")
                        .from(Sample::Table, Sample::ProtocolVersionId)
                        .to(ProtocolVersion::Table, ProtocolVersion::Id)
                        .on_delete(ForeignKeyAction::NoAction)
                        .on_update(ForeignKeyAction::NoAction)
                        .to_owned(),
                )
                .await?;

            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name("fk_sample_run_version_id")
                        .from(Sample::Table, Sample::RunVersionId)
                        .to(RunVersion::Table, RunVersion::Id)
                        .on_delete(ForeignKeyAction::NoAction)
                        .on_update(ForeignKeyAction::NoAction)
                        .to_owned(),
                )
                .await?;

            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name("fk_sample_version_id")
                        .from(Sample::Table, Sample::VersionId)
                        .to(SampleVersion::Table, SampleVersion::Id)
                        .on_delete(ForeignKeyAction::NoAction)
                        .on_update(ForeignKeyAction::NoAction)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Detach sample from the tables it references before dropping anything
        // (on SQLite the inline constraints go down with the table itself)
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name("fk_sample_version_id")
                        .table(Sample::Table)
                        .to_owned(),
                )
                .await?;

            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name("fk_sample_run_version_id")
                        .table(Sample::Table)
                        .to_owned(),
                )
                .await?;

            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name("fk_sample_protocol_version_id")
                        .table(Sample::Table)
                        .to_owned(),
                )
                .await?;
        }

        // Remove provenance columns from the version tables
        // (SQLite requires separate ALTER statements)
        manager
            .alter_table(
                Table::alter()
                    .table(UserVersion::Table)
                    .drop_column(UserVersion::WebappVersion)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(UserVersion::Table)
                    .drop_column(UserVersion::ServerVersion)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(RunVersion::Table)
                    .drop_column(RunVersion::WebappVersion)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(RunVersion::Table)
                    .drop_column(RunVersion::ServerVersion)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(ProtocolVersion::Table)
                    .drop_column(ProtocolVersion::WebappVersion)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(ProtocolVersion::Table)
                    .drop_column(ProtocolVersion::ServerVersion)
                    .to_owned(),
            )
            .await?;

        // Drop the history table first (sample no longer references it), then
        // the sample table. All accumulated rows are discarded with them.
        manager
            .drop_table(Table::drop().table(SampleVersion::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Sample::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Sample {
    Table,
    IsDeleted,
    CreatedOn,
    SampleId,
    PlateId,
    RunVersionId,
    ProtocolVersionId,
    VersionId,
    CreatedBy,
}

#[derive(DeriveIden)]
enum SampleVersion {
    Table,
    ServerVersion,
    WebappVersion,
    UpdatedOn,
    Id,
    SampleId,
    PlateId,
    RunVersionId,
    ProtocolVersionId,
    Data,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ProtocolVersion {
    Table,
    Id,
    ServerVersion,
    WebappVersion,
}

#[derive(DeriveIden)]
enum RunVersion {
    Table,
    Id,
    ServerVersion,
    WebappVersion,
}

#[derive(DeriveIden)]
enum UserVersion {
    Table,
    ServerVersion,
    WebappVersion,
}
