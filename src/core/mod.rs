//! Core business logic
//!
//! `pricing` is the pure tier resolver; `checkout` builds the corporate
//! checkout and quote flows on top of it.

pub mod checkout;
pub mod pricing;
