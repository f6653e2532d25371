//! REST API server for the quotes service.
//!
//! Provides HTTP endpoints for resetting, listing, adding, fetching,
//! and deleting quotes, with a uniform `{ok, data/error}` envelope.

pub mod handlers;
pub mod router;
pub mod server;
