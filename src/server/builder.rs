//! Startup: configuration loading and the serve entry point

use crate::config::{Config, GatewayConfig};
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// Read `path` (defaults when absent), layer `CORPORATE_*` variables and then
/// `cli` on top, and validate the result once
pub async fn load_config<C>(path: &Path, cli: C) -> Result<Config>
where
    C: FnOnce(&mut GatewayConfig),
{
    layer_config(path, |key| std::env::var(key).ok(), cli).await
}

/// [`load_config`] with an injectable environment
pub async fn layer_config<L, C>(path: &Path, env: L, cli: C) -> Result<Config>
where
    L: Fn(&str) -> Option<String>,
    C: FnOnce(&mut GatewayConfig),
{
    let mut config = if path.exists() {
        Config::from_file(path).await?
    } else {
        warn!(path = %path.display(), "no configuration file, using built-in plans and defaults");
        Config::default()
    };

    config.gateway.apply_overrides(env)?;
    cli(&mut config.gateway);

    config.validate()?;
    Ok(config)
}

pub async fn run_server(config: Config) -> Result<()> {
    let server = HttpServer::new(&config).await?;

    let base = format!("http://{}", config.server().address());
    info!("plans:     GET  {}/api/corporate/plans", base);
    info!("calculate: GET  {}/api/corporate/pricing/calculate?employees=N", base);
    info!("checkout:  POST {}/api/corporate/checkout", base);
    info!("quote:     POST {}/api/corporate/quote", base);

    server.start().await
}
