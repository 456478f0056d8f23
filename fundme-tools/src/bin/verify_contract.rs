//! Submit a deployed FundMe contract for source verification.
//!
//! Verification is skipped on development networks and when no API key is
//! set. Explorer failures are logged; the command still exits successfully.

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use fundme_tools::{verify, ExplorerClient, NetworkConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "verify-contract", about = "Verify a deployed contract on a block explorer")]
struct CliArgs {
    /// Address of the deployed contract
    #[arg(long)]
    address: String,

    /// Network the contract was deployed to
    #[arg(long, env = "NETWORK", default_value = "standalone")]
    network: String,

    /// Network configuration file
    #[arg(long, default_value = "config/networks.toml")]
    config: PathBuf,

    /// Explorer API key
    #[arg(long, env = "VERIFY_API_KEY")]
    api_key: Option<String>,

    /// Explorer verification endpoint, overriding the network's configured one
    #[arg(long, env = "VERIFY_API_URL")]
    api_url: Option<String>,

    /// Constructor arguments, in order
    #[arg(trailing_var_arg = true)]
    constructor_args: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // In order to view logs, run with `RUST_LOG=info`
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = CliArgs::parse();

    let config = NetworkConfig::load(&args.config)?;
    if !config.should_verify(&args.network, args.api_key.as_deref()) {
        info!(network = %args.network, "Skipping verification");
        return Ok(());
    }

    let api_url = args
        .api_url
        .or_else(|| config.network(&args.network)?.verify_api_url.clone())
        .with_context(|| format!("No verification endpoint configured for {}", args.network))?;
    let api_key = args.api_key.unwrap_or_default();

    let explorer = ExplorerClient::new(&api_url, api_key)?;
    verify(&explorer, &args.address, &args.constructor_args).await;
    Ok(())
}
