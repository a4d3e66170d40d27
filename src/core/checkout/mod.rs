//! Corporate checkout and quote requests
//!
//! The corporate site either buys a plan outright (a checkout session with a
//! payment provider) or asks sales for a quote. Both flows validate the
//! contact details, price the plan with the tier resolver and record the
//! result in the transaction repository.

mod hosted;
mod http;
mod provider;
mod service;
mod types;
mod validation;


pub use hosted::HostedCheckoutProvider;
pub use http::HttpCheckoutProvider;
pub use provider::{CheckoutProvider, CheckoutSession, CheckoutSessionRequest, build_provider};
pub use service::CheckoutService;
pub use types::{
    CheckoutResponse, CheckoutStatusResponse, CorporateCheckoutRequest, PaymentWebhook,
    QuoteAck, QuoteRequest,
};
pub use validation::{ValidatedCheckout, ValidatedQuote};
