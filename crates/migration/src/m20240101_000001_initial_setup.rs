use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create agents table
        manager
            .create_table(
                Table::create()
                    .table(Agents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Agents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Agents::Username)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Agents::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Agents::FullName).string_len(150))
                    .col(
                        ColumnDef::new(Agents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create packages table
        manager
            .create_table(
                Table::create()
                    .table(Packages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Packages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Packages::PackageUid)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Packages::Address).string_len(255).not_null())
                    .col(ColumnDef::new(Packages::City).string_len(100))
                    .col(ColumnDef::new(Packages::State).string_len(100))
                    .col(ColumnDef::new(Packages::PostalCode).string_len(20))
                    .col(
                        ColumnDef::new(Packages::Status)
                            .string_len(20)
                            .not_null()
                            .default("assigned"),
                    )
                    .col(ColumnDef::new(Packages::AssignedAgentId).integer())
                    .col(
                        ColumnDef::new(Packages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_package_agent")
                            .from(Packages::Table, Packages::AssignedAgentId)
                            .to(Agents::Table, Agents::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create deliveries table
        // package_id is intentionally not a foreign key: evidence for an
        // unknown package id is still stored.
        manager
            .create_table(
                Table::create()
                    .table(Deliveries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Deliveries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Deliveries::PackageId).integer().not_null())
                    .col(ColumnDef::new(Deliveries::AgentId).integer().not_null())
                    .col(ColumnDef::new(Deliveries::PhotoPath).string_len(255).not_null())
                    .col(ColumnDef::new(Deliveries::Latitude).double().not_null())
                    .col(ColumnDef::new(Deliveries::Longitude).double().not_null())
                    .col(
                        ColumnDef::new(Deliveries::DeliveredAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Deliveries::Notes).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_agent")
                            .from(Deliveries::Table, Deliveries::AgentId)
                            .to(Agents::Table, Agents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_packages_assigned_agent")
                    .table(Packages::Table)
                    .col(Packages::AssignedAgentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_deliveries_package")
                    .table(Deliveries::Table)
                    .col(Deliveries::PackageId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deliveries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Packages::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Agents::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Agents {
    Table,
    Id,
    Username,
    PasswordHash,
    FullName,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Packages {
    Table,
    Id,
    PackageUid,
    Address,
    City,
    State,
    PostalCode,
    Status,
    AssignedAgentId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Deliveries {
    Table,
    Id,
    PackageId,
    AgentId,
    PhotoPath,
    Latitude,
    Longitude,
    DeliveredAt,
    Notes,
}
