use std::sync::Arc;

use alloy_network::AnyNetwork;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    api::serve_api,
    chain::ProviderChainReader,
    config::ServiceConfig,
    errors::TokenBalanceError,
    provider::{create_http_provider, AnyHttpProvider},
    resolver::TokenResolver,
};

/// Resolver over the configured HTTP endpoint
pub type HttpResolver = TokenResolver<ProviderChainReader<AnyHttpProvider, AnyNetwork>>;

/// Load configuration through `lookup` and build the resolver it describes.
///
/// # Errors
///
/// Returns [`TokenBalanceError::Config`] for invalid settings and
/// [`TokenBalanceError::Rpc`] if the endpoint URL is unusable.
pub fn connect<F>(lookup: F) -> Result<(ServiceConfig, HttpResolver), TokenBalanceError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = ServiceConfig::from_lookup(lookup)?;
    let provider = create_http_provider(config.provider_config())?;
    Ok((config, TokenResolver::new(ProviderChainReader::new(provider))))
}

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let (config, resolver) = connect(|key| dotenvy::var(key).ok())?;

    info!(
        chain = %config.chain,
        rpc_url = %config.rpc_url,
        timeout_secs = config.rpc_timeout.as_secs(),
        "Connected to JSON-RPC endpoint"
    );

    let listener = TcpListener::bind(config.listen_addr()).await?;

    // One reader for the lifetime of the process, shared by every request
    serve_api(listener, Arc::new(resolver)).await?;

    Ok(())
}
