//! HTTP endpoint implementations for the quotes API.

mod quote_handlers;
mod request_utils;
mod response;

pub use quote_handlers::{add_quote, delete_quote, get_quote, list_quotes, reset};
pub use response::{
    error_response, success_response, success_response_empty, ApiError, ApiResponse, ErrorResponse,
};
