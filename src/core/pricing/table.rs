//! The ordered tier table

use super::MAX_PRICE_PER_EMPLOYEE;
use super::tier::PricingTier;
use crate::utils::error::{GatewayError, Result};
use rust_decimal_macros::dec;
use std::collections::HashSet;

/// Immutable, validated list of tiers ordered by ascending ceiling.
///
/// Every bound is strictly greater than the previous one and only the last
/// tier is unbounded, so any positive head count maps to exactly one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierTable {
    tiers: Vec<PricingTier>,
}

impl TierTable {
    /// Build a table, rejecting any ordering that would make selection ambiguous
    pub fn new(tiers: Vec<PricingTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(GatewayError::config("Tier table cannot be empty"));
        }

        let mut keys = HashSet::new();
        let mut previous: Option<u32> = None;
        let last = tiers.len() - 1;

        for (index, tier) in tiers.iter().enumerate() {
            if tier.key.trim().is_empty() {
                return Err(GatewayError::config("Tier key cannot be empty"));
            }
            if tier.key != tier.key.to_lowercase() {
                return Err(GatewayError::config(format!(
                    "Tier key must be lowercase: {}",
                    tier.key
                )));
            }
            if !keys.insert(tier.key.as_str()) {
                return Err(GatewayError::config(format!(
                    "Duplicate tier key: {}",
                    tier.key
                )));
            }
            if tier.price_per_employee <= dec!(0) {
                return Err(GatewayError::config(format!(
                    "Tier {} must have a positive price per employee",
                    tier.key
                )));
            }
            if tier.price_per_employee > MAX_PRICE_PER_EMPLOYEE {
                return Err(GatewayError::config(format!(
                    "Tier {} price per employee exceeds {}",
                    tier.key, MAX_PRICE_PER_EMPLOYEE
                )));
            }

            match tier.max_employees {
                None if index != last => {
                    return Err(GatewayError::config(format!(
                        "Only the last tier may be unbounded, but {} is",
                        tier.key
                    )));
                }
                None => {}
                Some(_) if index == last => {
                    return Err(GatewayError::config(format!(
                        "The last tier ({}) must be unbounded",
                        tier.key
                    )));
                }
                Some(0) => {
                    return Err(GatewayError::config(format!(
                        "Tier {} must admit at least one employee",
                        tier.key
                    )));
                }
                Some(max) => {
                    if previous.is_some_and(|prev| max <= prev) {
                        return Err(GatewayError::config(format!(
                            "Tier bounds must be strictly ascending ({} at {})",
                            tier.key, max
                        )));
                    }
                    previous = Some(max);
                }
            }
        }

        Ok(Self { tiers })
    }

    /// The published corporate plans
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                PricingTier::new("starter", "STARTER", Some(50), dec!(15)).with_features([
                    "Acesso básico ao app",
                    "Chat com Dr. Ana (10 sessões/mês)",
                    "Dashboard administrativo",
                    "Relatórios mensais",
                    "Suporte por email",
                ]),
                PricingTier::new("business", "BUSINESS", Some(200), dec!(12)).with_features([
                    "Tudo do Starter +",
                    "Chat ilimitado com Dr. Ana",
                    "Exercícios personalizados",
                    "Relatórios detalhados",
                    "Suporte prioritário",
                    "Integração básica",
                ]),
                PricingTier::new("enterprise", "ENTERPRISE", None, dec!(8)).with_features([
                    "Tudo do Business +",
                    "Dashboard executivo",
                    "Integração completa",
                    "Treinamentos para gestores",
                    "Webinars mensais",
                    "Account manager dedicado",
                    "SLA garantido",
                ]),
            ],
        }
    }

    /// First tier whose ceiling admits `employees`; `None` for a zero head count
    pub fn recommend(&self, employees: u64) -> Option<&PricingTier> {
        if employees == 0 {
            return None;
        }

        self.tiers
            .iter()
            .find(|tier| tier.covers(employees))
            .or_else(|| self.tiers.last())
    }

    /// Look up a tier by key, ignoring case and surrounding whitespace
    pub fn get(&self, key: &str) -> Option<&PricingTier> {
        let key = key.trim().to_lowercase();
        self.tiers.iter().find(|tier| tier.key == key)
    }

    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}
