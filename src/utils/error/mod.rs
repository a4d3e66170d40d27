//! Error handling utilities
//!
//! This module provides the service error type, its helper constructors and
//! the HTTP mapping used by every handler.

mod helpers;
mod response;
mod types;


pub use response::{ErrorResponse, decode_json, json_error_handler};
pub use types::{GatewayError, Result};
