//! Head count → plan + quote

use super::quote::Quote;
use super::table::TierTable;
use super::tier::PricingTier;
use super::{DEFAULT_ANNUAL_DISCOUNT_RATE, DEFAULT_CURRENCY};
use crate::config::PricingConfig;
use crate::utils::error::{GatewayError, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// The tier recommended for a head count, with its price
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub tier: &'a PricingTier,
    pub quote: Quote,
}

/// Resolves head counts against a tier table.
///
/// Pure and immutable once built; shared between request handlers without
/// locking.
#[derive(Debug, Clone)]
pub struct PricingResolver {
    table: TierTable,
    annual_discount_rate: Decimal,
    currency: String,
}

impl PricingResolver {
    pub fn new(
        table: TierTable,
        annual_discount_rate: Decimal,
        currency: impl Into<String>,
    ) -> Result<Self> {
        if annual_discount_rate < Decimal::ZERO || annual_discount_rate >= Decimal::ONE {
            return Err(GatewayError::config(format!(
                "Annual discount rate must be in [0, 1), got {}",
                annual_discount_rate
            )));
        }

        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(GatewayError::config("Currency cannot be empty"));
        }

        Ok(Self {
            table,
            annual_discount_rate,
            currency,
        })
    }

    /// Build from the `pricing` section of the configuration
    pub fn from_config(config: &PricingConfig) -> Result<Self> {
        let table = match &config.tiers {
            Some(tiers) => TierTable::new(tiers.clone())?,
            None => TierTable::standard(),
        };
        Self::new(table, config.annual_discount_rate, config.currency.clone())
    }

    /// Recommend a tier for `employees` and price it.
    ///
    /// Non-positive counts produce no result; every positive `i64` selects a
    /// tier, the unbounded one above the last ceiling.
    pub fn resolve(&self, employees: i64) -> Option<Resolution<'_>> {
        let employees = u64::try_from(employees).ok().filter(|count| *count > 0)?;
        let tier = self.table.recommend(employees)?;
        let quote = Quote::compute(tier, employees, self.annual_discount_rate);

        debug!(
            employees,
            plan = %tier.name,
            monthly = %quote.monthly_price,
            "Resolved pricing tier"
        );

        Some(Resolution { tier, quote })
    }

    /// Resolve raw form input; anything that is not a positive integer gives `None`
    pub fn resolve_input(&self, input: &str) -> Option<Resolution<'_>> {
        parse_employee_count(input).and_then(|count| self.resolve(count))
    }

    /// Price a chosen plan for `employees`, which may be zero
    pub fn quote_plan(&self, key: &str, employees: u64) -> Option<Quote> {
        self.table
            .get(key)
            .map(|tier| Quote::compute(tier, employees, self.annual_discount_rate))
    }

    pub fn table(&self) -> &TierTable {
        &self.table
    }

    pub fn annual_discount_rate(&self) -> Decimal {
        self.annual_discount_rate
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl Default for PricingResolver {
    fn default() -> Self {
        Self {
            table: TierTable::standard(),
            annual_discount_rate: DEFAULT_ANNUAL_DISCOUNT_RATE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Parse a head count typed into a form field
pub fn parse_employee_count(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}
