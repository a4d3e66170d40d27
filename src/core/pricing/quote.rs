//! Monthly and annual price for a head count under one tier

use super::MONTHS_PER_YEAR;
use super::tier::PricingTier;
use rust_decimal::Decimal;
use serde::Serialize;

/// A computed price. Never stored; recomputed for every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub plan_key: String,
    pub plan: String,
    pub employees: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_employee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub annual_price: Decimal,
}

impl Quote {
    /// `monthly = price × employees`, `annual = monthly × 12 × (1 − discount)`
    pub fn compute(tier: &PricingTier, employees: u64, annual_discount_rate: Decimal) -> Self {
        let monthly_price = tier.price_per_employee * Decimal::from(employees);
        let annual_price =
            monthly_price * Decimal::from(MONTHS_PER_YEAR) * (Decimal::ONE - annual_discount_rate);

        Self {
            plan_key: tier.key.clone(),
            plan: tier.name.clone(),
            employees,
            price_per_employee: tier.price_per_employee,
            monthly_price,
            annual_price,
        }
    }

    /// What twelve undiscounted monthly payments would cost
    pub fn annual_list_price(&self) -> Decimal {
        self.monthly_price * Decimal::from(MONTHS_PER_YEAR)
    }

    /// Amount saved by paying annually
    pub fn annual_savings(&self) -> Decimal {
        self.annual_list_price() - self.annual_price
    }
}
