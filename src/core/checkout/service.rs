//! Checkout and quote orchestration

use super::provider::{CheckoutProvider, CheckoutSessionRequest};
use super::types::{
    CheckoutResponse, CheckoutStatusResponse, CorporateCheckoutRequest, PaymentWebhook, QuoteAck,
    QuoteRequest,
};
use crate::config::CheckoutConfig;
use crate::core::pricing::PricingResolver;
use crate::storage::{
    CorporateTransaction, PaymentStatus, StoredQuoteRequest, TransactionRepository,
    TransactionStatus,
};
use crate::utils::error::{GatewayError, Result};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Prices, opens and records corporate checkouts; records quote requests
#[derive(Clone)]
pub struct CheckoutService {
    resolver: Arc<PricingResolver>,
    provider: Arc<dyn CheckoutProvider>,
    repository: Arc<dyn TransactionRepository>,
    config: CheckoutConfig,
}

impl CheckoutService {
    pub fn new(
        resolver: Arc<PricingResolver>,
        provider: Arc<dyn CheckoutProvider>,
        repository: Arc<dyn TransactionRepository>,
        config: CheckoutConfig,
    ) -> Self {
        Self {
            resolver,
            provider,
            repository,
            config,
        }
    }

    /// Open a payment session for the chosen plan and record it as pending.
    ///
    /// The amount is one month of the chosen plan for the given head count,
    /// even when another tier would be recommended for that count.
    pub async fn create_checkout(&self, request: CorporateCheckoutRequest) -> Result<CheckoutResponse> {
        let checkout = request.validate()?;

        let quote = self
            .resolver
            .quote_plan(&checkout.plan, u64::from(checkout.employees))
            .ok_or_else(|| GatewayError::invalid_plan(checkout.plan.clone()))?;

        if let Some(recommended) = self.resolver.table().recommend(u64::from(checkout.employees)) {
            if recommended.key != quote.plan_key {
                info!(
                    chosen = %quote.plan_key,
                    recommended = %recommended.key,
                    employees = checkout.employees,
                    "Checkout plan differs from recommended tier"
                );
            }
        }

        let currency = self.resolver.currency().to_string();
        let mut metadata = BTreeMap::new();
        metadata.insert("company".to_string(), checkout.company.clone());
        metadata.insert("contact_name".to_string(), checkout.name.clone());
        metadata.insert("plan".to_string(), quote.plan_key.clone());
        metadata.insert("employees".to_string(), checkout.employees.to_string());

        let session_request = CheckoutSessionRequest {
            amount: quote.monthly_price,
            currency: currency.clone(),
            plan: quote.plan_key.clone(),
            employees: checkout.employees,
            customer_email: checkout.email.clone(),
            origin_url: checkout.origin_url.clone(),
            success_url: format!("{}{}", checkout.origin_url, self.config.success_path),
            cancel_url: format!("{}{}", checkout.origin_url, self.config.cancel_path),
            metadata,
        };

        let session = self
            .provider
            .create_session(&session_request)
            .await
            .inspect_err(|e| warn!(error = %e, provider = self.provider.name(), "Checkout session failed"))?;

        let now = Utc::now();
        let transaction = CorporateTransaction {
            id: Uuid::new_v4(),
            session_id: session.id.clone(),
            company: checkout.company,
            contact_name: checkout.name,
            email: checkout.email,
            phone: checkout.phone,
            employees: checkout.employees,
            plan: quote.plan_key.clone(),
            amount: quote.monthly_price,
            currency: currency.clone(),
            provider: self.provider.name().to_string(),
            payment_status: PaymentStatus::Pending,
            status: TransactionStatus::Initiated,
            created_at: now,
            updated_at: now,
        };
        self.repository.insert_transaction(transaction).await?;

        info!(
            session_id = %session.id,
            plan = %quote.plan_key,
            employees = checkout.employees,
            amount = %quote.monthly_price,
            "Corporate checkout created"
        );

        Ok(CheckoutResponse {
            success: true,
            checkout_url: session.url,
            session_id: session.id,
            amount: quote.monthly_price,
            currency,
        })
    }

    pub async fn checkout_status(&self, session_id: &str) -> Result<CheckoutStatusResponse> {
        self.repository
            .find_by_session(session_id)
            .await?
            .map(CheckoutStatusResponse::from)
            .ok_or_else(|| GatewayError::not_found(format!("Checkout session {}", session_id)))
    }

    /// Apply a payment provider callback
    pub async fn apply_webhook(&self, webhook: PaymentWebhook) -> Result<CheckoutStatusResponse> {
        let transaction = self
            .repository
            .update_payment_status(&webhook.session_id, webhook.payment_status)
            .await?;

        info!(
            session_id = %transaction.session_id,
            payment_status = ?transaction.payment_status,
            "Payment status updated"
        );
        Ok(transaction.into())
    }

    /// Record a sales quote request, tagging it with the recommended tier
    pub async fn submit_quote(&self, request: QuoteRequest) -> Result<QuoteAck> {
        let quote = request.validate()?;

        let recommended_plan = quote
            .employees
            .and_then(|count| self.resolver.table().recommend(u64::from(count)))
            .map(|tier| tier.name.clone());

        let stored = StoredQuoteRequest {
            id: Uuid::new_v4(),
            company: quote.company,
            name: quote.name,
            email: quote.email,
            phone: quote.phone,
            employees: quote.employees,
            message: quote.message,
            selected_plan: quote.selected_plan,
            recommended_plan: recommended_plan.clone(),
            source: quote.source,
            created_at: Utc::now(),
        };
        let id = stored.id;

        info!(
            quote_id = %id,
            source = %stored.source,
            employees = ?stored.employees,
            "Quote request received"
        );
        self.repository.insert_quote_request(stored).await?;

        Ok(QuoteAck {
            success: true,
            id,
            recommended_plan,
        })
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}
