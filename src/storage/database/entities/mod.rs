pub mod corporate_transaction;
pub mod quote_request;

pub use corporate_transaction::Entity as CorporateTransaction;
pub use quote_request::Entity as QuoteRequest;
