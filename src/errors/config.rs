//! Error types for service configuration.

/// Errors that can occur while loading [`ServiceConfig`](crate::ServiceConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment value could not be parsed.
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        /// Environment variable name
        key: &'static str,
        /// The offending value
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// No RPC URL was configured and the chain has no public default.
    #[error("RPC_URL must be set for chain {chain}")]
    MissingRpcUrl {
        /// The selected chain
        chain: String,
    },
}

impl ConfigError {
    /// Create an `InvalidValue` error.
    pub fn invalid_value(
        key: &'static str,
        value: impl Into<String>,
        reason: impl std::fmt::Display,
    ) -> Self {
        ConfigError::InvalidValue {
            key,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
