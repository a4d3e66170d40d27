//! Wire payloads for the corporate endpoints

use crate::storage::{CorporateTransaction, PaymentStatus, TransactionStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/corporate/checkout`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorporateCheckoutRequest {
    pub company: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub employees: i64,
    pub plan: String,
    pub origin_url: String,
}

/// Successful checkout creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub checkout_url: String,
    pub session_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
}

/// Body of `GET /api/corporate/checkout/status/{session_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutStatusResponse {
    pub session_id: String,
    pub payment_status: PaymentStatus,
    pub status: TransactionStatus,
    pub plan: String,
    pub employees: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub currency: String,
}

impl From<CorporateTransaction> for CheckoutStatusResponse {
    fn from(transaction: CorporateTransaction) -> Self {
        Self {
            session_id: transaction.session_id,
            payment_status: transaction.payment_status,
            status: transaction.status,
            plan: transaction.plan,
            employees: transaction.employees,
            amount: transaction.amount,
            currency: transaction.currency,
        }
    }
}

/// Payment provider callback
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentWebhook {
    pub session_id: String,
    pub payment_status: PaymentStatus,
}

/// Body of `POST /api/corporate/quote`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuoteRequest {
    pub company: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub employees: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "selectedPlan", alias = "selected_plan")]
    pub selected_plan: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Acknowledgement of a stored quote request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteAck {
    pub success: bool,
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_plan: Option<String>,
}
