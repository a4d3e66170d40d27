use sea_orm::entity::prelude::*;

/// One row per checkout session.
///
/// Money is kept as decimal text and statuses as their wire strings so the
/// table reads the same on SQLite and Postgres.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "corporate_transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub session_id: String,
    pub id: Uuid,
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub employees: i64,
    pub plan: String,
    pub amount: String,
    pub currency: String,
    pub provider: String,
    pub payment_status: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
