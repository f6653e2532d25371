//! Request utilities for HTTP endpoints.

use http_body_util::BodyExt;
use hyper::{body::Bytes, Request, Response};
use tokio::time;

use crate::router::RouterError;
use quote_store::StoreError;

/// Type alias for matchit parameters with explicit lifetimes
pub type MatchitParams<'a, 'b> = matchit::Params<'a, 'b>;

/// Helper function to read request body with timeout
pub async fn read_request_body_with_timeout(
    req: Request<hyper::body::Incoming>,
    timeout_ms: u64,
) -> Result<Bytes, RouterError> {
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let body = time::timeout(timeout_duration, req.collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| RouterError::InternalError(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Map StoreError to appropriate RouterError
pub fn map_store_error_to_router_error(e: StoreError) -> RouterError {
    match e {
        StoreError::QuoteNotFound { .. } => RouterError::NotFound(e.to_string()),
        StoreError::EmptyText => RouterError::BadRequest(e.to_string()),
        StoreError::LockPoisoned => RouterError::InternalError(format!("Store error: {}", e)),
    }
}

/// Parse the `{id}` path parameter as a quote id.
pub fn parse_id_param(params: &MatchitParams<'_, '_>) -> Result<u64, RouterError> {
    let id_str = params.get("id").unwrap_or("0");
    id_str
        .parse()
        .map_err(|e| RouterError::BadRequest(format!("Invalid quote ID '{}': {}", id_str, e)))
}

/// Helper to build HTTP response with proper error handling
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}
