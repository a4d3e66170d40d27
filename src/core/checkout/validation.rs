//! Payload validation
//!
//! Everything here maps to a 422; plan lookup happens later so an unknown
//! plan on an otherwise valid payload is reported as a 400.

use super::types::{CorporateCheckoutRequest, QuoteRequest};
use crate::utils::error::{GatewayError, Result};
use crate::utils::{is_valid_email, is_valid_http_url};

/// Checkout payload with trimmed fields and a range-checked head count
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCheckout {
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub employees: u32,
    pub plan: String,
    pub origin_url: String,
}

/// Quote payload with trimmed fields
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuote {
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub employees: Option<u32>,
    pub message: Option<String>,
    pub selected_plan: Option<String>,
    pub source: String,
}

impl CorporateCheckoutRequest {
    pub fn validate(&self) -> Result<ValidatedCheckout> {
        let company = required("company", &self.company)?;
        let name = required("name", &self.name)?;
        let email = email(&self.email)?;
        let plan = required("plan", &self.plan)?.to_lowercase();

        let employees = u32::try_from(self.employees)
            .ok()
            .filter(|count| *count > 0)
            .ok_or_else(|| {
                GatewayError::validation(format!(
                    "employees must be a positive integer, got {}",
                    self.employees
                ))
            })?;

        let origin_url = required("origin_url", &self.origin_url)?;
        if !is_valid_http_url(&origin_url) {
            return Err(GatewayError::validation(format!(
                "origin_url must be an http(s) URL, got {}",
                origin_url
            )));
        }

        Ok(ValidatedCheckout {
            company,
            name,
            email,
            phone: optional(self.phone.as_deref()),
            employees,
            plan,
            origin_url: origin_url.trim_end_matches('/').to_string(),
        })
    }
}

impl QuoteRequest {
    pub fn validate(&self) -> Result<ValidatedQuote> {
        let employees = match self.employees {
            None => None,
            Some(count) => Some(
                u32::try_from(count)
                    .ok()
                    .filter(|count| *count > 0)
                    .ok_or_else(|| {
                        GatewayError::validation(format!(
                            "employees must be a positive integer, got {}",
                            count
                        ))
                    })?,
            ),
        };

        Ok(ValidatedQuote {
            company: required("company", &self.company)?,
            name: required("name", &self.name)?,
            email: email(&self.email)?,
            phone: optional(self.phone.as_deref()),
            employees,
            message: optional(self.message.as_deref()),
            selected_plan: optional(self.selected_plan.as_deref()),
            source: optional(self.source.as_deref()).unwrap_or_else(|| "unknown".to_string()),
        })
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

fn email(value: &str) -> Result<String> {
    let email = required("email", value)?;
    if !is_valid_email(&email) {
        return Err(GatewayError::validation(format!(
            "email is not a valid address: {}",
            email
        )));
    }
    Ok(email.to_lowercase())
}
