// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Native and ERC-20 balance resolution
//!
//! [`TokenResolver`] issues the standard ERC-20 view calls through a
//! [`ChainReader`] and assembles a [`BalanceRecord`]. Every call is attempted
//! exactly once and the calls of one resolution run concurrently, since none
//! depends on another.
//!
//! # Failure policy
//!
//! | Call | On failure |
//! |---|---|
//! | `name()` / `symbol()` | empty string |
//! | `decimals()` | [`TokenDecimals::UNKNOWN`] (raw amount shown as integral) |
//! | `balanceOf(wallet)` | [`ResolveError::TokenCallFailed`], or [`ResolveError::ChainUnavailable`] if the node is unreachable |
//! | native balance | [`ResolveError::ChainUnavailable`] |
//!
//! # Example
//!
//! ```rust,ignore
//! use tokenbalance::{HexAddress, TokenResolver};
//!
//! let resolver = TokenResolver::new(reader);
//! let wallet: HexAddress = "0x17a813df7322f8aac5cac75eb62c0d13b8aea29d".parse()?;
//! let record = resolver.resolve_token(token, &wallet).await?;
//! println!("{} {} (eth: {:?})", record.balance, record.symbol, record.eth_balance);
//! ```

use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use futures::future::{join, join5};
use tracing::{debug, warn, Instrument};

use crate::chain::ChainReader;
use crate::erc20::{self, CallError, IERC20Metadata};
use crate::errors::ResolveError;
use crate::spans;
use crate::types::{BalanceRecord, HexAddress, TokenAmount, TokenDecimals};

/// Resolves balances and token metadata for wallets.
///
/// Holds nothing but the chain reader, so one instance can serve any number
/// of concurrent requests.
#[derive(Debug, Clone)]
pub struct TokenResolver<R> {
    reader: R,
}

impl<R: ChainReader> TokenResolver<R> {
    /// Create a resolver over a chain reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Get a reference to the chain reader
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Native currency balance of `wallet` at the latest state.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ChainUnavailable`] if the node cannot be reached.
    pub async fn resolve_native(&self, wallet: Address) -> Result<TokenAmount, ResolveError> {
        async move {
            match self.reader.get_native_balance(wallet).await {
                Ok(balance) => Ok(TokenAmount::new(balance)),
                Err(e) => {
                    warn!(?wallet, error = %e, "Failed to fetch native balance");
                    Err(ResolveError::chain_unavailable(wallet, e))
                }
            }
        }
        .instrument(spans::resolve_native(wallet))
        .await
    }

    /// Native balance of `wallet` formatted with 18 decimals.
    pub async fn resolve_native_formatted(&self, wallet: Address) -> Result<String, ResolveError> {
        let balance = self.resolve_native(wallet).await?;
        Ok(balance.format(TokenDecimals::NATIVE))
    }

    /// Token metadata, token balance and native balance for `wallet`.
    ///
    /// Issues `decimals()`, `name()`, `symbol()`, `balanceOf(wallet)` and a
    /// native balance query concurrently. Metadata failures degrade into
    /// default fields (see the module docs).
    ///
    /// # Errors
    ///
    /// - [`ResolveError::TokenCallFailed`] if `balanceOf` is rejected or undecodable
    /// - [`ResolveError::ChainUnavailable`] if the node cannot be reached
    pub async fn resolve_token(
        &self,
        token: Address,
        wallet: &HexAddress,
    ) -> Result<BalanceRecord, ResolveError> {
        let holder = wallet.address();

        async move {
            let (decimals, name, symbol, balance, native) = join5(
                self.decimals(token),
                self.metadata_string(token, IERC20Metadata::nameCall {}),
                self.metadata_string(token, IERC20Metadata::symbolCall {}),
                self.balance_of(token, holder),
                self.resolve_native(holder),
            )
            .await;

            let balance = balance?;
            let native = native?;

            let record = BalanceRecord {
                wallet: wallet.as_str().to_string(),
                name,
                symbol,
                decimals,
                balance: balance.format(decimals),
                eth_balance: Some(native.format(TokenDecimals::NATIVE)),
            };

            debug!(
                symbol = %record.symbol,
                decimals = decimals.as_u8(),
                balance = %record.balance,
                "Resolved token balance"
            );

            Ok(record)
        }
        .instrument(spans::resolve_token(token, holder))
        .await
    }

    /// Formatted token balance of `wallet`, without metadata or native balance.
    ///
    /// Only `decimals()` and `balanceOf(wallet)` are called.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::TokenCallFailed`] if `balanceOf` is rejected or
    /// undecodable, [`ResolveError::ChainUnavailable`] if the node cannot be
    /// reached.
    pub async fn resolve_token_balance(
        &self,
        token: Address,
        wallet: Address,
    ) -> Result<String, ResolveError> {
        async move {
            let (decimals, balance) =
                join(self.decimals(token), self.balance_of(token, wallet)).await;
            Ok(balance?.format(decimals))
        }
        .instrument(spans::resolve_token_balance(token, wallet))
        .await
    }

    async fn decimals(&self, token: Address) -> TokenDecimals {
        match erc20::read(&self.reader, token, &IERC20Metadata::decimalsCall {}).await {
            Ok(decimals) => TokenDecimals::new(decimals),
            Err(e) => {
                debug!(?token, error = %e, "decimals() unavailable, treating amount as integral");
                TokenDecimals::UNKNOWN
            }
        }
    }

    async fn metadata_string<C>(&self, token: Address, call: C) -> String
    where
        C: SolCall<Return = String> + Send + Sync,
    {
        match erc20::read_string(&self.reader, token, &call).await {
            Ok(value) => value,
            Err(e) => {
                debug!(?token, method = C::SIGNATURE, error = %e, "Token metadata unavailable");
                String::new()
            }
        }
    }

    async fn balance_of(&self, token: Address, wallet: Address) -> Result<TokenAmount, ResolveError> {
        let call = IERC20Metadata::balanceOfCall { account: wallet };
        match erc20::read(&self.reader, token, &call).await {
            Ok(balance) => Ok(TokenAmount::new(balance)),
            Err(CallError::Rpc(e)) if e.is_connection_failure() => {
                warn!(?token, ?wallet, error = %e, "Node unreachable for token balance");
                Err(ResolveError::chain_unavailable(wallet, e))
            }
            Err(e) => {
                warn!(?token, ?wallet, error = %e, "Failed to fetch token balance");
                Err(ResolveError::token_call_failed(token, e))
            }
        }
    }
}
