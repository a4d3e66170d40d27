//! Pricing configuration

use crate::core::pricing::{DEFAULT_ANNUAL_DISCOUNT_RATE, DEFAULT_CURRENCY, PricingTier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tier table and annual discount.
///
/// When `tiers` is omitted the published STARTER / BUSINESS / ENTERPRISE
/// table is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// ISO 4217 currency of every price
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Fraction taken off twelve monthly payments for annual billing
    #[serde(
        default = "default_annual_discount_rate",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub annual_discount_rate: Decimal,
    /// Custom tier table, ascending by `max_employees`
    #[serde(default)]
    pub tiers: Option<Vec<PricingTier>>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            annual_discount_rate: default_annual_discount_rate(),
            tiers: None,
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_annual_discount_rate() -> Decimal {
    DEFAULT_ANNUAL_DISCOUNT_RATE
}
