// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical ERC-20 read-only call definitions
//!
//! Calldata is the 4-byte selector (first bytes of `keccak256` of the
//! canonical signature) followed by the ABI-encoded arguments. The `sol!`
//! macro generates both the encoder and the return decoder for each method.
//!
//! # Selectors
//!
//! - **name**: `name()` → `0x06fdde03`
//! - **symbol**: `symbol()` → `0x95d89b41`
//! - **decimals**: `decimals()` → `0x313ce567`
//! - **balanceOf**: `balanceOf(address)` → `0x70a08231`
//!
//! # Example
//!
//! ```rust
//! use alloy_primitives::Address;
//! use tokenbalance::erc20::IERC20Metadata;
//! use alloy_sol_types::SolCall;
//!
//! let calldata = IERC20Metadata::balanceOfCall { account: Address::ZERO }.abi_encode();
//! assert_eq!(&calldata[..4], &IERC20Metadata::balanceOfCall::SELECTOR);
//! assert_eq!(calldata.len(), 4 + 32);
//! ```

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{sol, SolCall};

use crate::chain::ChainReader;
use crate::errors::RpcError;

sol! {
    /// ERC-20 metadata and balance view methods
    ///
    /// `name`, `symbol` and `decimals` are optional in the standard, so
    /// callers must tolerate their absence.
    interface IERC20Metadata {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
    }
}

/// Why a single ERC-20 read failed.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The `eth_call` itself failed (transport error or revert).
    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// The returned bytes do not match the expected return ABI.
    #[error("Undecodable return data for {signature}: {source}")]
    Decode {
        /// Canonical method signature
        signature: &'static str,
        /// The decoder error
        #[source]
        source: alloy_sol_types::Error,
    },
}

/// Encode a typed call into `eth_call` input data.
pub fn encode<C: SolCall>(call: &C) -> Bytes {
    Bytes::from(call.abi_encode())
}

/// Issue `call` against `contract` and decode its return value.
pub async fn read<R, C>(reader: &R, contract: Address, call: &C) -> Result<C::Return, CallError>
where
    R: ChainReader + ?Sized,
    C: SolCall,
{
    let output = reader.call(contract, encode(call)).await?;
    decode::<C>(&output)
}

/// Decode return data strictly against the return ABI of `C`.
///
/// A word that does not fit the declared type (a `uint8` above 255, dirty
/// padding) is an error rather than being truncated.
pub fn decode<C: SolCall>(output: &[u8]) -> Result<C::Return, CallError> {
    C::abi_decode_returns_validate(output).map_err(|source| CallError::Decode {
        signature: C::SIGNATURE,
        source,
    })
}

/// Read a string-valued metadata method (`name` or `symbol`).
///
/// Some early tokens declare these as `bytes32` instead of `string`. When the
/// return data is not a valid ABI string but is exactly one word, it is read
/// as a NUL-padded UTF-8 value.
pub async fn read_string<R, C>(reader: &R, contract: Address, call: &C) -> Result<String, CallError>
where
    R: ChainReader + ?Sized,
    C: SolCall<Return = String>,
{
    let output = reader.call(contract, encode(call)).await?;
    decode_string(&output).map_err(|source| CallError::Decode {
        signature: C::SIGNATURE,
        source,
    })
}

/// Decode a `string` return, falling back to `bytes32` layout.
pub(crate) fn decode_string(output: &[u8]) -> Result<String, alloy_sol_types::Error> {
    match IERC20Metadata::nameCall::abi_decode_returns_validate(output) {
        Ok(value) => Ok(value),
        Err(err) if output.len() == 32 => {
            let end = output.iter().position(|&b| b == 0).unwrap_or(output.len());
            std::str::from_utf8(&output[..end])
                .map(str::to_owned)
                .map_err(|_| err)
        }
        Err(err) => Err(err),
    }
}
