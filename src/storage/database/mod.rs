//! Database-backed transaction repository
//!
//! SeaORM over SQLite (default feature) or Postgres. Migrations run on
//! connect, so a fresh `sqlite://...?mode=rwc` file is usable immediately.

mod entities;
mod migration;

use crate::storage::transactions::{
    CorporateTransaction, PaymentStatus, StoredQuoteRequest, TransactionRepository,
    TransactionStatus, duplicate_session,
};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use chrono::Utc;
use entities::{corporate_transaction, quote_request};
use migration::Migrator;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Checkout sessions and quote requests that survive restarts
#[derive(Clone)]
pub struct DatabaseRepository {
    db: DatabaseConnection,
}

impl DatabaseRepository {
    /// Connect and bring the schema up to date
    pub async fn connect(url: &str) -> Result<Self> {
        let mut options = ConnectOptions::new(url.to_string());
        options
            .max_connections(5)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(30))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        Migrator::up(&db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            GatewayError::Database(e)
        })?;

        info!(backend = ?db.get_database_backend(), "transaction database ready");
        Ok(Self { db })
    }
}

#[async_trait]
impl TransactionRepository for DatabaseRepository {
    async fn insert_transaction(&self, transaction: CorporateTransaction) -> Result<()> {
        let session_id = transaction.session_id.clone();
        let row = corporate_transaction::ActiveModel {
            session_id: Set(transaction.session_id),
            id: Set(transaction.id),
            company: Set(transaction.company),
            contact_name: Set(transaction.contact_name),
            email: Set(transaction.email),
            phone: Set(transaction.phone),
            employees: Set(i64::from(transaction.employees)),
            plan: Set(transaction.plan),
            amount: Set(transaction.amount.to_string()),
            currency: Set(transaction.currency),
            provider: Set(transaction.provider),
            payment_status: Set(transaction.payment_status.as_str().to_string()),
            status: Set(transaction.status.as_str().to_string()),
            created_at: Set(transaction.created_at),
            updated_at: Set(transaction.updated_at),
        };

        match entities::CorporateTransaction::insert(row)
            .exec_without_returning(&self.db)
            .await
        {
            Ok(_) => {
                debug!(session_id = %session_id, "transaction stored");
                Ok(())
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(duplicate_session(&session_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_session(&self, session_id: &str) -> Result<Option<CorporateTransaction>> {
        entities::CorporateTransaction::find_by_id(session_id.to_string())
            .one(&self.db)
            .await?
            .map(transaction_from_row)
            .transpose()
    }

    async fn update_payment_status(
        &self,
        session_id: &str,
        status: PaymentStatus,
    ) -> Result<CorporateTransaction> {
        // Only pending rows move, so final statuses stay put even when two
        // callbacks race.
        if status.is_final() {
            entities::CorporateTransaction::update_many()
                .col_expr(
                    corporate_transaction::Column::PaymentStatus,
                    Expr::value(status.as_str()),
                )
                .col_expr(
                    corporate_transaction::Column::Status,
                    Expr::value(TransactionStatus::from(status).as_str()),
                )
                .col_expr(
                    corporate_transaction::Column::UpdatedAt,
                    Expr::value(Utc::now()),
                )
                .filter(corporate_transaction::Column::SessionId.eq(session_id))
                .filter(
                    corporate_transaction::Column::PaymentStatus.eq(PaymentStatus::Pending.as_str()),
                )
                .exec(&self.db)
                .await?;
        }

        self.find_by_session(session_id)
            .await?
            .ok_or_else(|| GatewayError::not_found(format!("Checkout session {}", session_id)))
    }

    async fn insert_quote_request(&self, request: StoredQuoteRequest) -> Result<()> {
        let row = quote_request::ActiveModel {
            id: Set(request.id),
            company: Set(request.company),
            name: Set(request.name),
            email: Set(request.email),
            phone: Set(request.phone),
            employees: Set(request.employees.map(i64::from)),
            message: Set(request.message),
            selected_plan: Set(request.selected_plan),
            recommended_plan: Set(request.recommended_plan),
            source: Set(request.source),
            created_at: Set(request.created_at),
        };

        entities::QuoteRequest::insert(row)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn list_quote_requests(&self) -> Result<Vec<StoredQuoteRequest>> {
        let rows = entities::QuoteRequest::find()
            .order_by_asc(quote_request::Column::CreatedAt)
            .all(&self.db)
            .await?;

        rows.into_iter().map(quote_request_from_row).collect()
    }

    async fn transaction_count(&self) -> Result<usize> {
        let count = entities::CorporateTransaction::find().count(&self.db).await?;
        Ok(usize::try_from(count).unwrap_or(usize::MAX))
    }
}

fn corrupt(session: &str, column: &str, value: &str) -> GatewayError {
    GatewayError::storage(format!(
        "Stored row {} has an invalid {}: {}",
        session, column, value
    ))
}

fn transaction_from_row(row: corporate_transaction::Model) -> Result<CorporateTransaction> {
    let amount = Decimal::from_str(&row.amount)
        .map_err(|_| corrupt(&row.session_id, "amount", &row.amount))?;
    let employees = u32::try_from(row.employees)
        .map_err(|_| corrupt(&row.session_id, "employees", &row.employees.to_string()))?;
    let payment_status = PaymentStatus::parse(&row.payment_status)
        .ok_or_else(|| corrupt(&row.session_id, "payment_status", &row.payment_status))?;
    let status = TransactionStatus::parse(&row.status)
        .ok_or_else(|| corrupt(&row.session_id, "status", &row.status))?;

    Ok(CorporateTransaction {
        id: row.id,
        session_id: row.session_id,
        company: row.company,
        contact_name: row.contact_name,
        email: row.email,
        phone: row.phone,
        employees,
        plan: row.plan,
        amount,
        currency: row.currency,
        provider: row.provider,
        payment_status,
        status,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn quote_request_from_row(row: quote_request::Model) -> Result<StoredQuoteRequest> {
    let employees = row
        .employees
        .map(|count| {
            u32::try_from(count)
                .map_err(|_| corrupt(&row.id.to_string(), "employees", &count.to_string()))
        })
        .transpose()?;

    Ok(StoredQuoteRequest {
        id: row.id,
        company: row.company,
        name: row.name,
        email: row.email,
        phone: row.phone,
        employees,
        message: row.message,
        selected_plan: row.selected_plan,
        recommended_plan: row.recommended_plan,
        source: row.source,
        created_at: row.created_at,
    })
}
