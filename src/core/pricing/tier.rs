//! A single named plan

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named pricing plan with an inclusive employee ceiling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Stable lowercase identifier used by the checkout API (`starter`)
    pub key: String,
    /// Display name (`STARTER`)
    pub name: String,
    /// Inclusive upper bound; `None` for the unbounded top tier
    #[serde(default)]
    pub max_employees: Option<u32>,
    /// Monthly price per employee
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price_per_employee: Decimal,
    /// Marketing feature list
    #[serde(default)]
    pub features: Vec<String>,
}

impl PricingTier {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        max_employees: Option<u32>,
        price_per_employee: Decimal,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            max_employees,
            price_per_employee,
            features: Vec::new(),
        }
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this tier's ceiling admits `employees`
    pub fn covers(&self, employees: u64) -> bool {
        self.max_employees.is_none_or(|max| employees <= u64::from(max))
    }

    /// Ceiling as shown on the plan cards ("50", "∞")
    pub fn ceiling_label(&self) -> String {
        match self.max_employees {
            Some(max) => max.to_string(),
            None => "∞".to_string(),
        }
    }
}
