//! Integration tests for mindcare-corporate
//!
//! These tests go through the public API and the HTTP routes without mocking
//! the resolver or the storage layer.

pub mod api_tests;
pub mod config_validation_tests;
pub mod error_handling_tests;
pub mod pricing_tests;
pub mod storage_tests;
