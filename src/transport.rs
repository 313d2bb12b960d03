// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower middleware for the JSON-RPC client.
//!
//! The resolver never retries and never imposes its own deadline, so the
//! bound on how long a single chain call may take lives here, in the
//! transport. [`TimeoutLayer`] fails any request that outlives its deadline
//! and records per-request timing through `tracing`.
//!
//! ```rust,ignore
//! use tokenbalance::transport::TimeoutLayer;
//! use alloy_rpc_client::ClientBuilder;
//! use std::time::Duration;
//!
//! let client = ClientBuilder::default()
//!     .layer(TimeoutLayer::new(Duration::from_secs(30)))
//!     .http(rpc_url);
//! ```

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::{Duration, Instant},
};

use alloy_json_rpc::{RequestPacket, ResponsePacket};
use alloy_transport::{TransportError, TransportErrorKind};
use tower::Layer;
use tracing::{debug, trace, warn};

/// A Tower layer that bounds and traces every RPC request.
#[derive(Clone, Debug)]
pub struct TimeoutLayer {
    timeout: Duration,
    log_payloads: bool,
}

impl TimeoutLayer {
    /// Creates a layer that fails requests taking longer than `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            log_payloads: false,
        }
    }

    /// Also trace request and response payloads.
    ///
    /// Warning: This can be verbose.
    pub fn with_payload_logging(mut self, enabled: bool) -> Self {
        self.log_payloads = enabled;
        self
    }

    /// The configured per-request deadline
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<S> Layer<S> for TimeoutLayer {
    type Service = TimeoutService<S>;

    fn layer(&self, service: S) -> Self::Service {
        TimeoutService {
            service,
            timeout: self.timeout,
            log_payloads: self.log_payloads,
        }
    }
}

/// A Tower service enforcing a per-request deadline.
#[derive(Clone, Debug)]
pub struct TimeoutService<S> {
    service: S,
    timeout: Duration,
    log_payloads: bool,
}

impl<S> tower::Service<RequestPacket> for TimeoutService<S>
where
    S: tower::Service<RequestPacket, Response = ResponsePacket, Error = TransportError>
        + Clone
        + Send
        + 'static,
    S::Future: Send + 'static,
{
    type Response = ResponsePacket;
    type Error = TransportError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RequestPacket) -> Self::Future {
        let timeout = self.timeout;
        let log_payloads = self.log_payloads;
        let method = method_name(&request);

        if log_payloads {
            trace!(request = ?request, "RPC request");
        }

        let future = self.service.call(request);

        Box::pin(async move {
            let start = Instant::now();
            let result = match tokio::time::timeout(timeout, future).await {
                Ok(result) => result,
                Err(_) => Err(TransportErrorKind::custom_str(&format!(
                    "{method} timed out after {}ms",
                    timeout.as_millis()
                ))),
            };
            let duration_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(response) if log_payloads => {
                    trace!(response = ?response, duration_ms, "RPC response: {method}");
                }
                Ok(_) => debug!(duration_ms, "RPC response: {method}"),
                Err(e) => warn!(error = %e, duration_ms, "RPC error: {method}"),
            }

            result
        })
    }
}

fn method_name(request: &RequestPacket) -> String {
    match request {
        RequestPacket::Single(req) => req.method().to_string(),
        RequestPacket::Batch(reqs) => format!("batch({} calls)", reqs.len()),
    }
}
