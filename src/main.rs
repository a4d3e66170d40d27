//! MindCare corporate gateway
//!
//! Serves the corporate pricing, checkout and quote API.

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use mindcare_corporate::config::LoggingConfig;
use mindcare_corporate::server;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "corporate-gateway", version, about)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(
        short,
        long,
        env = "CORPORATE_CONFIG",
        default_value = "config/corporate.yaml"
    )]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let Args { config: path, host, port } = args;
    let config = server::load_config(&path, |gateway| {
        if let Some(host) = host {
            gateway.server.host = host;
        }
        if let Some(port) = port {
            gateway.server.port = port;
        }
    })
    .await
    .with_context(|| format!("loading {}", path.display()))?;

    init_tracing(config.logging());

    server::run_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display with context chain, not Debug
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
