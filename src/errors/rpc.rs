//! Shared RPC error types for chain reader operations.
//!
//! This module provides error types for failures reaching the JSON-RPC node
//! or executing a read-only call against it.

/// Errors that can occur during blockchain RPC operations.
///
/// Carries the name of the operation that was being performed to aid in
/// debugging.
///
/// # Examples
///
/// ```rust
/// use tokenbalance::RpcError;
///
/// let error = RpcError::ProviderUrlInvalid("not a url".to_string());
/// println!("Error: {}", error);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Failed to reach the node or to get a usable answer from it.
    ///
    /// Covers network errors, timeouts and malformed responses.
    #[error("Chain connection failed during {operation}")]
    ChainConnectionFailed {
        /// Description of the operation that failed
        operation: String,
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The node answered with a JSON-RPC error, typically a reverted `eth_call`.
    #[error("{operation} rejected by node: {message}")]
    CallRejected {
        /// Description of the operation that failed
        operation: String,
        /// Error payload returned by the node
        message: String,
    },

    /// The configured RPC endpoint URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),
}

impl RpcError {
    /// Helper to create a `ChainConnectionFailed` error from any error type.
    pub fn chain_connection_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::ChainConnectionFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `CallRejected` error.
    pub fn call_rejected(operation: impl Into<String>, message: impl Into<String>) -> Self {
        RpcError::CallRejected {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether the node itself could not be reached or did not answer.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, RpcError::ChainConnectionFailed { .. })
    }
}
