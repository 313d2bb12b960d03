// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP provider construction
//!
//! Providers use `AnyNetwork` so the same reader works against any
//! EVM-compatible endpoint. The transport is wrapped in a
//! [`TimeoutLayer`] so every chain call has a bounded duration.
//!
//! ```rust,ignore
//! use tokenbalance::{create_http_provider, ProviderConfig};
//! use std::time::Duration;
//!
//! let provider = create_http_provider(
//!     ProviderConfig::new("https://eth.llamarpc.com").with_timeout(Duration::from_secs(10)),
//! )?;
//! ```

use std::time::Duration;

use alloy_network::AnyNetwork;
use alloy_provider::ProviderBuilder;
use alloy_rpc_client::ClientBuilder;

use crate::errors::RpcError;
use crate::transport::TimeoutLayer;

/// Type alias for an HTTP provider using AnyNetwork
pub type AnyHttpProvider = alloy_provider::RootProvider<AnyNetwork>;

/// Default per-request timeout
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for creating providers
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// RPC endpoint URL
    pub url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Trace full request/response payloads
    pub log_payloads: bool,
}

impl ProviderConfig {
    /// Create a new provider configuration with the specified URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_RPC_TIMEOUT,
            log_payloads: false,
        }
    }

    /// Set request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable payload tracing
    #[must_use]
    pub fn with_payload_logging(mut self, enabled: bool) -> Self {
        self.log_payloads = enabled;
        self
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new("http://localhost:8545")
    }
}

/// Create an HTTP provider with the given configuration
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_http_provider(config: ProviderConfig) -> Result<AnyHttpProvider, RpcError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{}: {e}", config.url)))?;

    let client = ClientBuilder::default()
        .layer(TimeoutLayer::new(config.timeout).with_payload_logging(config.log_payloads))
        .http(url);

    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .network::<AnyNetwork>()
        .connect_client(client))
}
