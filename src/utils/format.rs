//! Money formatting
//!
//! Amounts are rendered the way the Brazilian landing pages show them:
//! `.` groups thousands, `,` separates cents.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Email pattern: local@domain.tld
pub(crate) static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap_or_else(|e| {
        tracing::error!("Failed to compile email regex: {}", e);
        // [^\s\S] never matches
        Regex::new(r"[^\s\S]").expect("empty-set pattern is valid")
    })
});

/// Currency symbol for an ISO 4217 code
pub fn currency_symbol(currency: &str) -> &str {
    match currency.to_ascii_uppercase().as_str() {
        "BRL" => "R$",
        "USD" => "US$",
        "EUR" => "€",
        _ => currency,
    }
}

/// Format an amount as currency, e.g. `R$ 7.200,00`
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let integer = abs.trunc().normalize();
    let cents = ((abs - integer) * Decimal::ONE_HUNDRED)
        .trunc()
        .to_u32()
        .unwrap_or_default();

    format!(
        "{}{} {},{:02}",
        if negative { "-" } else { "" },
        currency_symbol(currency),
        group_thousands(&integer.to_string()),
        cents
    )
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
