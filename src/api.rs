//! HTTP routes over the resolver.
//!
//! | Route | Response |
//! |---|---|
//! | `GET /balance/{token}/{wallet}` | formatted token balance, `text/plain` |
//! | `GET /token/{token}/{wallet}` | [`BalanceRecord`] with `ethBalance`, JSON |
//! | `GET /eth/{wallet}` | formatted native balance, `text/plain` |
//! | `GET /health` | `ok` |
//!
//! Malformed addresses answer `400`, an unreachable node `503` and a failed
//! `balanceOf` call `502`, each with a JSON `{"error": ...}` body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

use crate::chain::ChainReader;
use crate::errors::{AddressParseError, ResolveError};
use crate::resolver::TokenResolver;
use crate::types::{BalanceRecord, HexAddress};

/// Resolver shared across request handlers
pub type SharedResolver<R> = Arc<TokenResolver<R>>;

/// Failure of a single HTTP request
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A path segment is not a valid address.
    #[error(transparent)]
    InvalidAddress(#[from] AddressParseError),

    /// Resolution aborted.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl ApiError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            ApiError::Resolve(ResolveError::ChainUnavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Resolve(ResolveError::TokenCallFailed { .. }) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build the application router.
pub fn router<R>(resolver: SharedResolver<R>) -> Router
where
    R: ChainReader + 'static,
{
    Router::new()
        .route("/balance/{token}/{wallet}", get(token_balance::<R>))
        .route("/token/{token}/{wallet}", get(token_record::<R>))
        .route("/eth/{wallet}", get(native_balance::<R>))
        .route("/health", get(|| async { "ok" }))
        .with_state(resolver)
}

/// Starts the API server.
pub async fn serve_api<R>(listener: TcpListener, resolver: SharedResolver<R>) -> anyhow::Result<()>
where
    R: ChainReader + 'static,
{
    let app = router(resolver);

    let addr = listener.local_addr()?;

    info!(address = ?addr, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn token_balance<R: ChainReader>(
    State(resolver): State<SharedResolver<R>>,
    Path((token, wallet)): Path<(String, String)>,
) -> Result<String, ApiError> {
    let token: HexAddress = token.parse()?;
    let wallet: HexAddress = wallet.parse()?;
    info!(%token, %wallet, "Received balance request");

    Ok(resolver
        .resolve_token_balance(token.address(), wallet.address())
        .await?)
}

async fn token_record<R: ChainReader>(
    State(resolver): State<SharedResolver<R>>,
    Path((token, wallet)): Path<(String, String)>,
) -> Result<Json<BalanceRecord>, ApiError> {
    let token: HexAddress = token.parse()?;
    let wallet: HexAddress = wallet.parse()?;
    info!(%token, %wallet, "Received token request");

    let record = resolver.resolve_token(token.address(), &wallet).await?;
    Ok(Json(record))
}

async fn native_balance<R: ChainReader>(
    State(resolver): State<SharedResolver<R>>,
    Path(wallet): Path<String>,
) -> Result<String, ApiError> {
    let wallet: HexAddress = wallet.parse()?;
    info!(%wallet, "Received native balance request");

    Ok(resolver.resolve_native_formatted(wallet.address()).await?)
}
