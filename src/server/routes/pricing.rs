//! Plan table and quote endpoints
//!
//! `calculate` mirrors the pricing page calculator: it recommends a tier for
//! the head count and answers `{"quote": null}` for anything that is not a
//! positive integer. `{plan}` prices a plan the customer already picked.

use crate::core::pricing::{PricingTier, Quote, parse_employee_count};
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use crate::utils::format_currency;
use actix_web::{HttpResponse, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configure pricing routes (mounted under `/api/corporate`)
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/plans", web::get().to(list_plans))
        .route("/pricing/calculate", web::get().to(calculate))
        .route("/pricing/{plan}", web::get().to(plan_quote));
}

/// `?employees=` as typed by the user
#[derive(Debug, Deserialize)]
pub struct EmployeesQuery {
    #[serde(default)]
    pub employees: Option<String>,
}

/// One row of the plan table
#[derive(Debug, Serialize)]
pub struct PlanView {
    pub key: String,
    pub name: String,
    pub max_employees: Option<u32>,
    pub employees_label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_employee: Decimal,
    pub price_display: String,
    pub features: Vec<String>,
}

impl PlanView {
    fn new(tier: &PricingTier, currency: &str) -> Self {
        Self {
            key: tier.key.clone(),
            name: tier.name.clone(),
            max_employees: tier.max_employees,
            employees_label: tier.ceiling_label(),
            price_per_employee: tier.price_per_employee,
            price_display: format_currency(tier.price_per_employee, currency),
            features: tier.features.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlansResponse {
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_discount_rate: Decimal,
    pub plans: Vec<PlanView>,
}

/// A quote with its currency and display strings
#[derive(Debug, Serialize)]
pub struct QuoteView {
    #[serde(flatten)]
    pub quote: Quote,
    pub currency: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_savings: Decimal,
    pub monthly_display: String,
    pub annual_display: String,
}

impl QuoteView {
    pub fn new(quote: Quote, currency: &str) -> Self {
        Self {
            annual_savings: quote.annual_savings(),
            monthly_display: format_currency(quote.monthly_price, currency),
            annual_display: format_currency(quote.annual_price, currency),
            currency: currency.to_string(),
            quote,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub quote: Option<QuoteView>,
}

/// GET /api/corporate/plans
pub async fn list_plans(state: web::Data<AppState>) -> Result<HttpResponse> {
    let resolver = &state.resolver;
    let currency = resolver.currency();

    Ok(HttpResponse::Ok().json(PlansResponse {
        currency: currency.to_string(),
        annual_discount_rate: resolver.annual_discount_rate(),
        plans: resolver
            .table()
            .tiers()
            .iter()
            .map(|tier| PlanView::new(tier, currency))
            .collect(),
    }))
}

/// GET /api/corporate/pricing/calculate?employees=N
pub async fn calculate(
    state: web::Data<AppState>,
    query: web::Query<EmployeesQuery>,
) -> Result<HttpResponse> {
    let input = query.employees.as_deref().unwrap_or_default();
    let quote = state
        .resolver
        .resolve_input(input)
        .map(|resolution| QuoteView::new(resolution.quote, state.resolver.currency()));

    debug!(input = %input, resolved = quote.is_some(), "Pricing calculation");
    Ok(HttpResponse::Ok().json(CalculateResponse { quote }))
}

/// GET /api/corporate/pricing/{plan}?employees=N
pub async fn plan_quote(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<EmployeesQuery>,
) -> Result<HttpResponse> {
    let plan = path.into_inner();
    let employees = match query.employees.as_deref() {
        None => 0,
        Some(raw) => parse_employee_count(raw)
            .and_then(|count| u64::try_from(count).ok())
            .ok_or_else(|| {
                GatewayError::validation("employees must be a non-negative integer")
            })?,
    };

    let quote = state
        .resolver
        .quote_plan(&plan, employees)
        .ok_or_else(|| GatewayError::invalid_plan(plan.clone()))?;

    Ok(HttpResponse::Ok().json(QuoteView::new(quote, state.resolver.currency())))
}
