//! Error types for balance resolution.
//!
//! Only two failures abort a resolution. Missing `name`, `symbol` or
//! `decimals` degrade into default fields of the record instead.

use alloy_primitives::Address;

use super::RpcError;

/// Errors that abort a native or token balance resolution.
///
/// # Examples
///
/// ```rust,ignore
/// use tokenbalance::{ResolveError, TokenResolver};
///
/// match resolver.resolve_token(token, &wallet).await {
///     Ok(record) => println!("{} {}", record.balance, record.symbol),
///     Err(ResolveError::TokenCallFailed { token, reason }) => {
///         eprintln!("balanceOf on {token} failed: {reason}");
///     }
///     Err(e) => eprintln!("node unreachable: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The node could not be reached while resolving balances of `wallet`.
    #[error("Chain unavailable while resolving balances of {wallet}")]
    ChainUnavailable {
        /// Wallet whose balance was requested
        wallet: Address,
        /// The underlying RPC failure
        #[source]
        source: RpcError,
    },

    /// The node rejected the mandatory `balanceOf` call, or its return data
    /// was undecodable.
    #[error("balanceOf call on token {token} failed: {reason}")]
    TokenCallFailed {
        /// Token contract address
        token: Address,
        /// Why the call or its decoding failed
        reason: String,
    },
}

impl ResolveError {
    /// Create a `ChainUnavailable` error for a wallet.
    pub fn chain_unavailable(wallet: Address, source: RpcError) -> Self {
        ResolveError::ChainUnavailable { wallet, source }
    }

    /// Create a `TokenCallFailed` error with details.
    pub fn token_call_failed(token: Address, reason: impl std::fmt::Display) -> Self {
        ResolveError::TokenCallFailed {
            token,
            reason: reason.to_string(),
        }
    }
}
