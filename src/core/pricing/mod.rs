//! Tiered per-employee pricing
//!
//! A [`TierTable`] holds the named plans in ascending order of their
//! employee ceiling. The [`PricingResolver`] picks the plan that covers a
//! head count and prices it as a monthly and a discounted annual [`Quote`].

mod quote;
mod resolver;
mod table;
mod tier;


pub use quote::Quote;
pub use resolver::{PricingResolver, Resolution, parse_employee_count};
pub use table::TierTable;
pub use tier::PricingTier;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Annual contracts are billed at 80% of twelve monthly payments
pub const DEFAULT_ANNUAL_DISCOUNT_RATE: Decimal = dec!(0.20);

/// Currency all default prices are expressed in
pub const DEFAULT_CURRENCY: &str = "BRL";

/// Months billed per annual contract
pub const MONTHS_PER_YEAR: u32 = 12;

/// Highest accepted price per employee. Together with a `u64` head count this
/// keeps every quote inside `Decimal`'s range.
pub const MAX_PRICE_PER_EMPLOYEE: Decimal = dec!(1_000_000);
