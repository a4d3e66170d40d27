//! Test fixtures and data factories
//!
//! Factories produce payloads that pass validation; tests break one field at
//! a time.

use actix_web::web;
use mindcare_corporate::Config;
use mindcare_corporate::server::{AppState, build_state};
use mindcare_corporate::storage::StorageLayer;
use serde_json::{Value, json};
use uuid::Uuid;

/// Handler state over in-memory storage
pub fn test_state(config: &Config) -> web::Data<AppState> {
    let state = build_state(config, StorageLayer::in_memory()).expect("test state should build");
    web::Data::new(state)
}

/// Factory for corporate checkout bodies
pub struct CheckoutFactory;

impl CheckoutFactory {
    /// A valid business-plan checkout for 50 employees
    pub fn valid() -> Value {
        json!({
            "company": "Empresa Teste Ltda",
            "name": "João Silva",
            "email": format!("rh-{}@empresateste.com.br", &Uuid::new_v4().simple().to_string()[..8]),
            "phone": "(11) 99999-9999",
            "employees": 50,
            "plan": "business",
            "origin_url": "https://mindcare.example.com"
        })
    }

    pub fn for_plan(plan: &str, employees: i64) -> Value {
        let mut body = Self::valid();
        body["plan"] = json!(plan);
        body["employees"] = json!(employees);
        body
    }

    pub fn without(field: &str) -> Value {
        let mut body = Self::valid();
        if let Some(object) = body.as_object_mut() {
            object.remove(field);
        }
        body
    }
}

/// Factory for quote request bodies
pub struct QuoteFactory;

impl QuoteFactory {
    pub fn valid() -> Value {
        json!({
            "company": "ACME Saúde",
            "name": "Maria Souza",
            "email": "maria@acme.com.br",
            "phone": "(21) 98888-7777",
            "employees": 350,
            "message": "Gostaríamos de uma apresentação",
            "selectedPlan": "enterprise",
            "source": "pricing_page"
        })
    }
}
