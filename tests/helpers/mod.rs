// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for tokenbalance integration tests
//!
//! Provides an in-memory chain reader so resolver and HTTP behavior can be
//! tested without a real node.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy_primitives::{address, Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use async_trait::async_trait;
use tokenbalance::erc20::IERC20Metadata;
use tokenbalance::{ChainReader, RpcError};

/// DreamTeam Token on the test network (6 decimals)
pub const DTT_TOKEN: Address = address!("cad9c6677f51b936408ca3631220c9e45a9af0f6");
pub const DTT_WALLET: &str = "0x17a813df7322f8aac5cac75eb62c0d13b8aea29d";

/// OMG on mainnet (18 decimals)
pub const OMG_TOKEN: Address = address!("d26114cd6ee289accf82350c8d8487fedb8a0c07");
pub const OMG_WALLET: &str = "0x42d4722b804585cdf6406fa7739e794b0aa8b1ff";

/// EOS on mainnet: bytes32 metadata with an empty name
pub const EOS_TOKEN: Address = address!("86fa049857e0209aa7d9e616f7eb3b3b78ecfdb0");
pub const EOS_WALLET: &str = "0xbfaa1a1ea534d35199e84859975648b59880f639";

/// `whole * 10^decimals`
pub fn units(whole: u64, decimals: u8) -> U256 {
    U256::from(whole) * U256::from(10u64).pow(U256::from(decimals))
}

pub fn wallet(raw: &str) -> Address {
    raw.parse().unwrap()
}

fn reverted() -> RpcError {
    RpcError::call_rejected("eth_call", "execution reverted")
}

fn unreachable_node(operation: &str) -> RpcError {
    RpcError::chain_connection_failed(
        operation,
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
    )
}

/// Return data a fake token serves for each method; `None` reverts.
#[derive(Debug, Clone, Default)]
pub struct FakeToken {
    name: Option<Bytes>,
    symbol: Option<Bytes>,
    decimals: Option<Bytes>,
    balances: HashMap<Address, U256>,
    balance_of_reverts: bool,
}

impl FakeToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string().abi_encode().into());
        self
    }

    pub fn with_raw_name(mut self, data: impl Into<Bytes>) -> Self {
        self.name = Some(data.into());
        self
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string().abi_encode().into());
        self
    }

    pub fn with_bytes32_symbol(mut self, symbol: &str) -> Self {
        let mut word = [0u8; 32];
        word[..symbol.len()].copy_from_slice(symbol.as_bytes());
        self.symbol = Some(Bytes::copy_from_slice(&word));
        self
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = Some(U256::from(decimals).abi_encode().into());
        self
    }

    pub fn with_raw_decimals(mut self, data: impl Into<Bytes>) -> Self {
        self.decimals = Some(data.into());
        self
    }

    pub fn with_balance(mut self, holder: Address, balance: U256) -> Self {
        self.balances.insert(holder, balance);
        self
    }

    pub fn with_reverting_balance_of(mut self) -> Self {
        self.balance_of_reverts = true;
        self
    }

    fn respond(&self, calldata: &[u8]) -> Result<Bytes, RpcError> {
        let selector: [u8; 4] = calldata
            .get(..4)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(reverted)?;

        if selector == IERC20Metadata::nameCall::SELECTOR {
            self.name.clone().ok_or_else(reverted)
        } else if selector == IERC20Metadata::symbolCall::SELECTOR {
            self.symbol.clone().ok_or_else(reverted)
        } else if selector == IERC20Metadata::decimalsCall::SELECTOR {
            self.decimals.clone().ok_or_else(reverted)
        } else if selector == IERC20Metadata::balanceOfCall::SELECTOR {
            if self.balance_of_reverts || calldata.len() != 36 {
                return Err(reverted());
            }
            let holder = Address::from_slice(&calldata[16..36]);
            let balance = self.balances.get(&holder).copied().unwrap_or_default();
            Ok(balance.abi_encode().into())
        } else {
            Err(reverted())
        }
    }
}

/// In-memory [`ChainReader`] for tests.
///
/// Calls to an address with no registered token succeed with empty return
/// data, which is what a node answers for an `eth_call` to an account
/// without code.
#[derive(Debug, Default)]
pub struct FakeChainReader {
    tokens: HashMap<Address, FakeToken>,
    native: HashMap<Address, U256>,
    native_unavailable: bool,
    calls_unavailable: bool,
    calls: AtomicUsize,
}

impl FakeChainReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, address: Address, token: FakeToken) -> Self {
        self.tokens.insert(address, token);
        self
    }

    pub fn with_native_balance(mut self, holder: Address, balance: U256) -> Self {
        self.native.insert(holder, balance);
        self
    }

    /// Make every native balance query fail as if the node were down
    pub fn with_native_unavailable(mut self) -> Self {
        self.native_unavailable = true;
        self
    }

    /// Make every `eth_call` fail as if the node were down
    pub fn with_calls_unavailable(mut self) -> Self {
        self.calls_unavailable = true;
        self
    }

    /// Number of chain calls served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Reader holding the three reference tokens and their holders
    pub fn reference_tokens() -> Self {
        Self::new()
            .with_token(
                DTT_TOKEN,
                FakeToken::new()
                    .with_name("DreamTeam Token")
                    .with_symbol("DTT")
                    .with_decimals(6)
                    .with_balance(wallet(DTT_WALLET), units(10_000, 6)),
            )
            .with_native_balance(wallet(DTT_WALLET), units(50, 18))
            .with_token(
                OMG_TOKEN,
                FakeToken::new()
                    .with_name("OMGToken")
                    .with_symbol("OMG")
                    .with_decimals(18)
                    .with_balance(wallet(OMG_WALLET), units(600_000, 18)),
            )
            .with_token(
                EOS_TOKEN,
                FakeToken::new()
                    .with_raw_name(Bytes::copy_from_slice(&[0u8; 32]))
                    .with_bytes32_symbol("EOS")
                    .with_decimals(18)
                    .with_balance(wallet(EOS_WALLET), units(9_200_000, 18)),
            )
    }
}

#[async_trait]
impl ChainReader for FakeChainReader {
    async fn get_native_balance(&self, address: Address) -> Result<U256, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.native_unavailable {
            return Err(unreachable_node("eth_getBalance"));
        }
        Ok(self.native.get(&address).copied().unwrap_or_default())
    }

    async fn call(&self, contract: Address, calldata: Bytes) -> Result<Bytes, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.calls_unavailable {
            return Err(unreachable_node("eth_call"));
        }
        match self.tokens.get(&contract) {
            Some(token) => token.respond(&calldata),
            None => Ok(Bytes::new()),
        }
    }
}
