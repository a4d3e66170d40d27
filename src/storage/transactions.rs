//! Corporate transactions and quote requests

use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment state reported by the checkout provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Expired,
}

impl PaymentStatus {
    /// Paid, failed and expired sessions never change again
    pub fn is_final(self) -> bool {
        !matches!(self, PaymentStatus::Pending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Expired => "expired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [Self::Pending, Self::Paid, Self::Failed, Self::Expired]
            .into_iter()
            .find(|status| status.as_str() == value)
    }
}

/// Lifecycle of the transaction record itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Initiated,
    Completed,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Initiated => "initiated",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [Self::Initiated, Self::Completed, Self::Cancelled]
            .into_iter()
            .find(|status| status.as_str() == value)
    }
}

impl From<PaymentStatus> for TransactionStatus {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => TransactionStatus::Initiated,
            PaymentStatus::Paid => TransactionStatus::Completed,
            PaymentStatus::Failed | PaymentStatus::Expired => TransactionStatus::Cancelled,
        }
    }
}

/// A corporate checkout, recorded when its session is created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateTransaction {
    pub id: Uuid,
    pub session_id: String,
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub employees: u32,
    pub plan: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
    pub provider: String,
    pub payment_status: PaymentStatus,
    pub status: TransactionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A "talk to sales" request from the corporate site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredQuoteRequest {
    pub id: Uuid,
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub employees: Option<u32>,
    pub message: Option<String>,
    pub selected_plan: Option<String>,
    pub recommended_plan: Option<String>,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Persistence for checkouts and quote requests
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn insert_transaction(&self, transaction: CorporateTransaction) -> Result<()>;

    async fn find_by_session(&self, session_id: &str) -> Result<Option<CorporateTransaction>>;

    /// Record a provider-reported payment status; final statuses are sticky
    async fn update_payment_status(
        &self,
        session_id: &str,
        status: PaymentStatus,
    ) -> Result<CorporateTransaction>;

    async fn insert_quote_request(&self, request: StoredQuoteRequest) -> Result<()>;

    async fn list_quote_requests(&self) -> Result<Vec<StoredQuoteRequest>>;

    async fn transaction_count(&self) -> Result<usize>;
}

/// Process-local repository
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    transactions: DashMap<String, CorporateTransaction>,
    quote_requests: DashMap<Uuid, StoredQuoteRequest>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryRepository {
    async fn insert_transaction(&self, transaction: CorporateTransaction) -> Result<()> {
        match self.transactions.entry(transaction.session_id.clone()) {
            Entry::Occupied(_) => Err(duplicate_session(&transaction.session_id)),
            Entry::Vacant(slot) => {
                slot.insert(transaction);
                Ok(())
            }
        }
    }

    async fn find_by_session(&self, session_id: &str) -> Result<Option<CorporateTransaction>> {
        Ok(self
            .transactions
            .get(session_id)
            .map(|entry| entry.value().clone()))
    }

    async fn update_payment_status(
        &self,
        session_id: &str,
        status: PaymentStatus,
    ) -> Result<CorporateTransaction> {
        let mut entry = self
            .transactions
            .get_mut(session_id)
            .ok_or_else(|| GatewayError::not_found(format!("Checkout session {}", session_id)))?;

        if !entry.payment_status.is_final() && entry.payment_status != status {
            entry.payment_status = status;
            entry.status = status.into();
            entry.updated_at = Utc::now();
        }

        Ok(entry.value().clone())
    }

    async fn insert_quote_request(&self, request: StoredQuoteRequest) -> Result<()> {
        self.quote_requests.insert(request.id, request);
        Ok(())
    }

    async fn list_quote_requests(&self) -> Result<Vec<StoredQuoteRequest>> {
        let mut requests: Vec<_> = self
            .quote_requests
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        requests.sort_by_key(|request| request.created_at);
        Ok(requests)
    }

    async fn transaction_count(&self) -> Result<usize> {
        Ok(self.transactions.len())
    }
}

pub(crate) fn duplicate_session(session_id: &str) -> GatewayError {
    GatewayError::storage(format!("Duplicate checkout session: {}", session_id))
}
