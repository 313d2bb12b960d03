//! Error types for the tokenbalance library.
//!
//! Module-specific errors allow fine-grained handling, while
//! [`TokenBalanceError`] wraps all of them for callers that only need to
//! propagate:
//!
//! - [`RpcError`] - failures reaching the node or executing an `eth_call`
//! - [`ResolveError`] - the two hard failures of a balance resolution
//! - [`ConfigError`] - invalid or missing service configuration
//! - [`AddressParseError`] - malformed hexadecimal addresses
//!
//! # Example
//!
//! ```rust,ignore
//! use tokenbalance::{TokenBalanceError, TokenResolver};
//!
//! async fn native(resolver: &TokenResolver<impl ChainReader>) -> Result<String, TokenBalanceError> {
//!     let wallet = "0x17a813df7322f8aac5cac75eb62c0d13b8aea29d".parse::<HexAddress>()?;
//!     Ok(resolver.resolve_native_formatted(wallet.address()).await?)
//! }
//! ```

mod address;
mod config;
mod resolve;
mod rpc;

pub use address::AddressParseError;
pub use config::ConfigError;
pub use resolve::ResolveError;
pub use rpc::RpcError;

/// Unified error type for all tokenbalance operations.
#[derive(Debug, thiserror::Error)]
pub enum TokenBalanceError {
    /// Error from the chain reader or provider construction.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error from a balance resolution.
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// Error from loading configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from parsing an address.
    #[error("Address error: {0}")]
    Address(#[from] AddressParseError),
}
