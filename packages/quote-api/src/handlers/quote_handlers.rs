//! Endpoint handlers for the quote collection.

use hyper::{body::Bytes, Request, Response};

use crate::router::{AppState, RouterError};

use super::request_utils::{
    build_response, map_store_error_to_router_error, parse_id_param,
    read_request_body_with_timeout, MatchitParams,
};
use super::response::{success_response, success_response_empty};

/// Resets the store to the built-in seed set.
///
/// # Endpoint
/// `POST /reset`
///
/// # Request Body
/// Clients send `{}`; the body carries no information and is drained
/// without being parsed.
///
/// # Response
/// - **200 OK**: `{"ok": true}`
pub async fn reset(
    req: Request<hyper::body::Incoming>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let _ = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;

    state
        .store
        .reset()
        .map_err(map_store_error_to_router_error)?;
    tracing::debug!("Store reset via API");

    let json = serde_json::to_vec(&success_response_empty())
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_response(200, json)
}

/// Lists all quotes in ascending id order.
///
/// # Endpoint
/// `GET /quotes`
///
/// # Response
/// - **200 OK**:
/// ```json
/// {
///   "ok": true,
///   "data": [{"id": 1, "text": "..."}, {"id": 2, "text": "..."}]
/// }
/// ```
pub async fn list_quotes(
    _req: Request<hyper::body::Incoming>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let quotes = state
        .store
        .list()
        .map_err(map_store_error_to_router_error)?;

    let json = serde_json::to_vec(&success_response(quotes))
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_response(200, json)
}

/// Adds a new quote.
///
/// # Endpoint
/// `POST /quotes`
///
/// # Request Body
/// ```json
/// {
///   "text": "I have a dream"
/// }
/// ```
///
/// # Response
/// - **201 Created**: Returns the full updated quote list
/// ```json
/// {
///   "ok": true,
///   "data": [{"id": 1, "text": "..."}, ...]
/// }
/// ```
///
/// # Errors
/// - **400 Bad Request**: Body unparsable, `text` missing, `text` not a
///   string, or `text` empty. The store is untouched in every case.
/// - **500 Internal Server Error**: Store failure
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:6543/quotes \
///   -H "Content-Type: application/json" \
///   -d '{"text": "I have a dream"}'
/// ```
pub async fn add_quote(
    req: Request<hyper::body::Incoming>,
    _params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let body_bytes = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;

    let body: serde_json::Value = serde_json::from_slice(&body_bytes)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))?;

    // Schema check at the boundary: `text` must be a string. The type
    // check runs before the emptiness check, which the store performs
    // itself before mutating anything.
    let text = match body.get("text") {
        Some(serde_json::Value::String(text)) => text.as_str(),
        Some(other) => {
            return Err(RouterError::BadRequest(format!(
                "Field 'text' must be a string, got: {}",
                other
            )))
        }
        None => return Err(RouterError::BadRequest("Missing field 'text'".to_string())),
    };

    let quote = state
        .store
        .add(text)
        .map_err(map_store_error_to_router_error)?;
    tracing::debug!("Added quote {} via API", quote.id);

    // Contract: the create response carries the full updated list
    let quotes = state
        .store
        .list()
        .map_err(map_store_error_to_router_error)?;

    let json = serde_json::to_vec(&success_response(quotes))
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_response(201, json)
}

/// Fetches a single quote by id.
///
/// # Endpoint
/// `GET /quotes/{id}`
///
/// # Response
/// - **200 OK**: `{"ok": true, "data": {"id": 3, "text": "..."}}`
///
/// # Errors
/// - **400 Bad Request**: `{id}` is not an integer
/// - **404 Not Found**: No quote with that id (deleted ids included)
pub async fn get_quote(
    _req: Request<hyper::body::Incoming>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params)?;

    let quote = state
        .store
        .get(id)
        .map_err(map_store_error_to_router_error)?;

    let json = serde_json::to_vec(&success_response(quote))
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_response(200, json)
}

/// Deletes a quote by id.
///
/// # Endpoint
/// `DELETE /quotes/{id}`
///
/// # Response
/// - **200 OK**: `{"ok": true, "data": null}`
///
/// # Errors
/// - **400 Bad Request**: `{id}` is not an integer
/// - **404 Not Found**: No quote with that id; repeated deletes of the
///   same id keep failing with 404
pub async fn delete_quote(
    _req: Request<hyper::body::Incoming>,
    params: MatchitParams<'_, '_>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = parse_id_param(&params)?;

    state
        .store
        .delete(id)
        .map_err(map_store_error_to_router_error)?;
    tracing::debug!("Deleted quote {} via API", id);

    let json = serde_json::to_vec(&success_response(serde_json::Value::Null))
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_response(200, json)
}
