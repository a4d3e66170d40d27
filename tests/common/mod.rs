//! Common test utilities for mindcare-corporate
//!
//! - Request fixtures with valid defaults
//! - App state builders over in-memory storage
//! - Custom assertions on JSON error bodies

pub mod assertions;
pub mod fixtures;

pub use fixtures::{CheckoutFactory, QuoteFactory, test_state};
