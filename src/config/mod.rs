//! Service configuration
//!
//! The service talks to exactly one JSON-RPC endpoint, chosen once at
//! startup. Values come from the environment (a `.env` file is honored by
//! the binary):
//!
//! | Variable | Default |
//! |---|---|
//! | `CHAIN` | `mainnet` (`testnet` is an alias for `sepolia`) |
//! | `RPC_URL` | public endpoint for `CHAIN` |
//! | `API_PORT` | `3000` |
//! | `RPC_TIMEOUT_SECS` | `30` |
//! | `RPC_LOG_PAYLOADS` | `false` |
//!
//! # Example
//!
//! ```rust
//! use tokenbalance::ServiceConfig;
//! use alloy_chains::NamedChain;
//!
//! let config = ServiceConfig::from_lookup(|key| match key {
//!     "CHAIN" => Some("testnet".to_string()),
//!     _ => None,
//! })
//! .unwrap();
//! assert_eq!(config.chain, NamedChain::Sepolia);
//! ```

use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use alloy_chains::NamedChain;

use crate::errors::ConfigError;
use crate::provider::{ProviderConfig, DEFAULT_RPC_TIMEOUT};

pub mod constants;

use constants::{DEFAULT_API_PORT, MAINNET_RPC_URL, SEPOLIA_RPC_URL};

/// Runtime configuration of the balance service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Chain the endpoint serves
    pub chain: NamedChain,
    /// JSON-RPC endpoint URL
    pub rpc_url: String,
    /// HTTP listen port
    pub port: u16,
    /// Per-request RPC timeout
    pub rpc_timeout: Duration,
    /// Trace full RPC payloads
    pub log_payloads: bool,
}

impl ServiceConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a value does not parse, or if no `RPC_URL`
    /// is set for a chain without a public default endpoint.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let chain = match lookup("CHAIN") {
            Some(value) => parse_chain(&value)?,
            None => NamedChain::Mainnet,
        };

        let rpc_url = match lookup("RPC_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => url,
            None => default_rpc_url(chain)
                .ok_or_else(|| ConfigError::MissingRpcUrl {
                    chain: chain.to_string(),
                })?
                .to_string(),
        };

        let port = parse_or("API_PORT", lookup("API_PORT"), DEFAULT_API_PORT)?;

        let rpc_timeout = match lookup("RPC_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = parse_value("RPC_TIMEOUT_SECS", &value)?;
                if secs == 0 {
                    return Err(ConfigError::invalid_value(
                        "RPC_TIMEOUT_SECS",
                        value,
                        "must be greater than zero",
                    ));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_RPC_TIMEOUT,
        };

        let log_payloads = parse_or("RPC_LOG_PAYLOADS", lookup("RPC_LOG_PAYLOADS"), false)?;

        Ok(Self {
            chain,
            rpc_url,
            port,
            rpc_timeout,
            log_payloads,
        })
    }

    /// Provider settings derived from this configuration
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig::new(self.rpc_url.clone())
            .with_timeout(self.rpc_timeout)
            .with_payload_logging(self.log_payloads)
    }

    /// Address the HTTP server binds to
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Public endpoint used when `RPC_URL` is not set
pub fn default_rpc_url(chain: NamedChain) -> Option<&'static str> {
    match chain {
        NamedChain::Mainnet => Some(MAINNET_RPC_URL),
        NamedChain::Sepolia => Some(SEPOLIA_RPC_URL),
        _ => None,
    }
}

fn parse_chain(value: &str) -> Result<NamedChain, ConfigError> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "testnet" => return Ok(NamedChain::Sepolia),
        "ethereum" => return Ok(NamedChain::Mainnet),
        _ => {}
    }

    if let Ok(chain) = NamedChain::from_str(&normalized) {
        return Ok(chain);
    }

    let id: u64 = normalized
        .parse()
        .map_err(|_| ConfigError::invalid_value("CHAIN", value, "unknown chain name"))?;
    NamedChain::try_from(id).map_err(|e| ConfigError::invalid_value("CHAIN", value, e))
}

fn parse_value<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::invalid_value(key, value, e))
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.map_or(Ok(default), |v| parse_value(key, &v))
}
