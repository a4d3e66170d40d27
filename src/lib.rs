//! # MindCare Corporate
//!
//! Corporate pricing and checkout service. Maps a company's employee count to
//! a per-employee plan, prices it monthly and annually, and opens checkout
//! sessions for the plan the customer picks.
//!
//! ## Resolving a plan
//!
//! ```rust
//! use mindcare_corporate::PricingResolver;
//!
//! let resolver = PricingResolver::default();
//! let resolution = resolver.resolve(200).expect("positive count");
//! assert_eq!(resolution.tier.name, "BUSINESS");
//! assert_eq!(resolution.quote.monthly_price.to_string(), "2400");
//!
//! assert!(resolver.resolve(0).is_none());
//! assert!(resolver.resolve_input("abc").is_none());
//! ```
//!
//! ## Serving the corporate API
//!
//! ```rust,no_run
//! use mindcare_corporate::{CorporateGateway, server};
//! use std::path::Path;
//!
//! #[actix_web::main]
//! async fn main() -> mindcare_corporate::Result<()> {
//!     let config = server::load_config(Path::new("config/corporate.yaml"), |_| {}).await?;
//!     CorporateGateway::new(config).await?.run().await
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use core::checkout::{CheckoutProvider, CheckoutService, CorporateCheckoutRequest, QuoteRequest};
pub use core::pricing::{PricingResolver, PricingTier, Quote, Resolution, TierTable};
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// The corporate HTTP gateway: configuration plus a ready-to-start server
pub struct CorporateGateway {
    config: Config,
    server: server::HttpServer,
}

impl CorporateGateway {
    /// Open storage and wire the resolver and checkout provider from `config`
    pub async fn new(config: Config) -> Result<Self> {
        info!(currency = %config.pricing().currency, "preparing corporate gateway");
        let server = server::HttpServer::new(&config).await?;
        Ok(Self { config, server })
    }

    /// Serve until the actix system shuts down
    pub async fn run(self) -> Result<()> {
        info!(address = %self.config.server().address(), "serving corporate API");
        self.server.start().await
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Reported by `/health` and `/version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// What `build.rs` stamped into this binary; `unknown` where git or rustc was unavailable
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// Unix seconds
    pub build_time: &'static str,
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
            rust_version: env!("RUST_VERSION"),
        }
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo::current()
}
