use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CorporateTransactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CorporateTransactions::SessionId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CorporateTransactions::Id).uuid().not_null())
                    .col(ColumnDef::new(CorporateTransactions::Company).string().not_null())
                    .col(
                        ColumnDef::new(CorporateTransactions::ContactName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CorporateTransactions::Email).string().not_null())
                    .col(ColumnDef::new(CorporateTransactions::Phone).string().null())
                    .col(
                        ColumnDef::new(CorporateTransactions::Employees)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CorporateTransactions::Plan).string().not_null())
                    .col(ColumnDef::new(CorporateTransactions::Amount).string().not_null())
                    .col(ColumnDef::new(CorporateTransactions::Currency).string().not_null())
                    .col(ColumnDef::new(CorporateTransactions::Provider).string().not_null())
                    .col(
                        ColumnDef::new(CorporateTransactions::PaymentStatus)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(CorporateTransactions::Status)
                            .string()
                            .not_null()
                            .default("initiated"),
                    )
                    .col(
                        ColumnDef::new(CorporateTransactions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CorporateTransactions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_corporate_transactions_email")
                    .table(CorporateTransactions::Table)
                    .col(CorporateTransactions::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CorporateTransactions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CorporateTransactions {
    Table,
    SessionId,
    Id,
    Company,
    ContactName,
    Email,
    Phone,
    Employees,
    Plan,
    Amount,
    Currency,
    Provider,
    PaymentStatus,
    Status,
    CreatedAt,
    UpdatedAt,
}
