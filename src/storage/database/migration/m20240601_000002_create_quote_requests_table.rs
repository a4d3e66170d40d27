use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QuoteRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuoteRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(QuoteRequests::Company).string().not_null())
                    .col(ColumnDef::new(QuoteRequests::Name).string().not_null())
                    .col(ColumnDef::new(QuoteRequests::Email).string().not_null())
                    .col(ColumnDef::new(QuoteRequests::Phone).string().null())
                    .col(ColumnDef::new(QuoteRequests::Employees).big_integer().null())
                    .col(ColumnDef::new(QuoteRequests::Message).text().null())
                    .col(ColumnDef::new(QuoteRequests::SelectedPlan).string().null())
                    .col(ColumnDef::new(QuoteRequests::RecommendedPlan).string().null())
                    .col(ColumnDef::new(QuoteRequests::Source).string().not_null())
                    .col(
                        ColumnDef::new(QuoteRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuoteRequests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum QuoteRequests {
    Table,
    Id,
    Company,
    Name,
    Email,
    Phone,
    Employees,
    Message,
    SelectedPlan,
    RecommendedPlan,
    Source,
    CreatedAt,
}
