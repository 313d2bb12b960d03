// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain reader capability
//!
//! [`ChainReader`] is the narrow interface the resolver needs from a node:
//! native balance lookups and read-only contract calls, both at the latest
//! state. [`ProviderChainReader`] implements it over any alloy
//! [`Provider`], so the transport stack (timeouts, logging) is configured
//! once when the provider is built.
//!
//! # Example
//!
//! ```rust,ignore
//! use tokenbalance::{ProviderChainReader, ProviderConfig, TokenResolver, create_http_provider};
//!
//! let provider = create_http_provider(ProviderConfig::new("https://eth.llamarpc.com"))?;
//! let resolver = TokenResolver::new(ProviderChainReader::new(provider));
//! ```

use std::marker::PhantomData;

use alloy_network::{Network, TransactionBuilder};
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::Provider;
use alloy_transport::TransportError;
use async_trait::async_trait;

use crate::errors::RpcError;

/// Read-only access to a blockchain node.
///
/// Implementations perform a single attempt per call. Timeouts belong to the
/// implementation's transport, never to callers.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Native currency balance of `address` in wei.
    async fn get_native_balance(&self, address: Address) -> Result<U256, RpcError>;

    /// Execute `eth_call` against `contract` with raw `calldata`.
    async fn call(&self, contract: Address, calldata: Bytes) -> Result<Bytes, RpcError>;
}

/// [`ChainReader`] backed by an alloy provider.
pub struct ProviderChainReader<P, N> {
    provider: P,
    _network: PhantomData<fn() -> N>,
}

impl<P, N> ProviderChainReader<P, N>
where
    N: Network,
    P: Provider<N>,
{
    /// Wrap a provider
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            _network: PhantomData,
        }
    }

    /// Get a reference to the inner provider
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: std::fmt::Debug, N> std::fmt::Debug for ProviderChainReader<P, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderChainReader")
            .field("provider", &self.provider)
            .finish()
    }
}

impl<P: Clone, N> Clone for ProviderChainReader<P, N> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            _network: PhantomData,
        }
    }
}

#[async_trait]
impl<P, N> ChainReader for ProviderChainReader<P, N>
where
    N: Network,
    P: Provider<N>,
{
    async fn get_native_balance(&self, address: Address) -> Result<U256, RpcError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| classify("eth_getBalance", e))
    }

    async fn call(&self, contract: Address, calldata: Bytes) -> Result<Bytes, RpcError> {
        let request = N::TransactionRequest::default()
            .with_to(contract)
            .with_input(calldata);

        self.provider
            .call(request)
            .await
            .map_err(|e| classify("eth_call", e))
    }
}

/// Separate answers from the node (error responses) from failures to reach it.
fn classify(operation: &str, error: TransportError) -> RpcError {
    match error {
        TransportError::ErrorResp(payload) => RpcError::call_rejected(operation, payload.to_string()),
        other => RpcError::chain_connection_failed(operation, other),
    }
}
