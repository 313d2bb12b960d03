// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Read-only native and ERC-20 balance queries over an EVM JSON-RPC endpoint.
//!
//! - [`format_units`] renders raw integer amounts as exact decimal strings
//! - [`TokenResolver`] derives token metadata and balances through a
//!   [`ChainReader`], degrading gracefully for non-standard tokens
//! - [`api`] exposes both over HTTP

pub mod api;
pub mod bootstrap;
pub mod chain;
pub mod config;
pub mod erc20;
mod errors;
mod format;
pub mod provider;
mod resolver;
mod spans;
pub mod transport;
mod types;

pub use chain::{ChainReader, ProviderChainReader};
pub use config::ServiceConfig;
pub use errors::*;
pub use format::format_units;
pub use provider::{create_http_provider, AnyHttpProvider, ProviderConfig};
pub use resolver::TokenResolver;
pub use types::*;
