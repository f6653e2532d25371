//! Matchit routing configuration.

use std::sync::Arc;

use hyper::{body::Bytes, Request, Response};
use matchit::Router as MatchitRouter;

use crate::handlers;
use quote_store::{QuoteStore, ServiceConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Quote store instance
    pub store: Arc<QuoteStore>,
    /// Service configuration
    pub config: Arc<ServiceConfig>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with default routes.
    pub fn new(store: Arc<QuoteStore>, config: Arc<ServiceConfig>) -> Self {
        let mut router = MatchitRouter::new();

        router
            .insert("/reset", RouteHandler::Reset)
            .expect("Failed to insert /reset route");
        router
            .insert("/quotes", RouteHandler::Collection)
            .expect("Failed to insert /quotes route");
        router
            .insert("/quotes/{id}", RouteHandler::Item)
            .expect("Failed to insert /quotes/{id} route");

        Self {
            inner: router,
            state: AppState { store, config },
        }
    }

    /// Routes an incoming request to the appropriate handler.
    ///
    /// Handler failures are converted to their envelope responses here,
    /// so every outcome short of a broken connection reaches the client
    /// as `{ok, data/error}` JSON.
    pub async fn route(
        &self,
        req: Request<hyper::body::Incoming>,
    ) -> Result<Response<Bytes>, RouterError> {
        let path = req.uri().path().to_string();

        match self.inner.at(&path) {
            Ok(matched) => {
                let handler = matched.value;
                match handler
                    .handle(req, matched.params, self.state.clone())
                    .await
                {
                    Ok(response) => Ok(response),
                    Err(err) => {
                        if let RouterError::InternalError(msg) = &err {
                            tracing::error!("Internal error handling {}: {}", path, msg);
                        }
                        Ok(err.into())
                    }
                }
            }
            Err(_) => {
                // Return 404 for unmatched routes
                let error_response = handlers::error_response(
                    404,
                    "Not Found".to_string(),
                    Some(format!("No route found for {}", path)),
                );
                let body = serde_json::to_vec(&error_response).map_err(|e| {
                    RouterError::InternalError(format!("Failed to serialize error response: {}", e))
                })?;
                Ok(Response::builder()
                    .status(404)
                    .header("Content-Type", "application/json")
                    .body(Bytes::from(body))
                    .map_err(|e| {
                        RouterError::InternalError(format!("Failed to build response: {}", e))
                    })?)
            }
        }
    }
}

/// Route handler function.
enum RouteHandler {
    Reset,
    Collection,
    Item,
}

impl RouteHandler {
    /// Handles a request with the given route parameters.
    async fn handle(
        &self,
        req: Request<hyper::body::Incoming>,
        params: matchit::Params<'_, '_>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError> {
        match self {
            RouteHandler::Reset => {
                if req.method() == hyper::Method::POST {
                    handlers::reset(req, params, state).await
                } else {
                    Err(RouterError::MethodNotAllowed)
                }
            }
            RouteHandler::Collection => {
                if req.method() == hyper::Method::GET {
                    handlers::list_quotes(req, params, state).await
                } else if req.method() == hyper::Method::POST {
                    handlers::add_quote(req, params, state).await
                } else {
                    Err(RouterError::MethodNotAllowed)
                }
            }
            RouteHandler::Item => {
                if req.method() == hyper::Method::GET {
                    handlers::get_quote(req, params, state).await
                } else if req.method() == hyper::Method::DELETE {
                    handlers::delete_quote(req, params, state).await
                } else {
                    Err(RouterError::MethodNotAllowed)
                }
            }
        }
    }
}

/// Router error type.
#[derive(Debug)]
pub enum RouterError {
    MethodNotAllowed,
    InternalError(String),
    Timeout,
    BadRequest(String),
    NotFound(String),
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            RouterError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
            RouterError::Timeout => write!(f, "Request Timeout"),
            RouterError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            RouterError::NotFound(msg) => write!(f, "Not Found: {}", msg),
        }
    }
}

impl std::error::Error for RouterError {}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let (status, message) = match &err {
            RouterError::MethodNotAllowed => (405, "Method Not Allowed"),
            RouterError::InternalError(msg) => (500, msg.as_str()),
            RouterError::Timeout => (408, "Request Timeout"),
            RouterError::BadRequest(msg) => (400, msg.as_str()),
            RouterError::NotFound(msg) => (404, msg.as_str()),
        };

        let error_response = handlers::error_response(status, message.to_string(), None);
        // Fallback for when error handling itself fails to serialize
        let body = serde_json::to_vec(&error_response).unwrap_or_else(|e| {
            format!(
                "{{\"ok\":false,\"error\":{{\"code\":\"500\",\"message\":\"Failed to serialize error: {}\",\"details\":null}}}}",
                e
            )
            .into_bytes()
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(500)
                    .body(Bytes::from("Internal Server Error"))
                    .expect("Failed to build fallback error response")
            })
    }
}
