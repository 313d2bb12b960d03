//! Span creation helpers for resolver operations.
//!
//! Telemetry is kept out of the business logic: each instrumented operation
//! has a span constructor here, and the resolver attaches it with
//! `Instrument::instrument` so the span stays correct across `.await`.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, token: Address) -> Result<T> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(token))
//!     .await
//! }
//! ```

use alloy_primitives::Address;
use tracing::{Level, Span};

/// Create span for a native balance lookup.
///
/// Parent: request span from the HTTP layer, if any
#[inline]
pub(crate) fn resolve_native(wallet: Address) -> Span {
    tracing::debug_span!("tokenbalance.resolve_native", wallet = %wallet)
}

/// Create span for the combined token + native resolution.
///
/// This is the main entry point for token lookups.
///
/// Parent: None (root span for this operation)
/// Children: resolve_native span
#[inline]
pub(crate) fn resolve_token(token: Address, wallet: Address) -> Span {
    tracing::span!(
        Level::INFO,
        "tokenbalance.resolve_token",
        token = %token,
        wallet = %wallet,
    )
}

/// Create span for a balance-only token lookup.
#[inline]
pub(crate) fn resolve_token_balance(token: Address, wallet: Address) -> Span {
    tracing::debug_span!(
        "tokenbalance.resolve_token_balance",
        token = %token,
        wallet = %wallet,
    )
}
