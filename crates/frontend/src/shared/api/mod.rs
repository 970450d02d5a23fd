//! Authenticated REST client
//!
//! Every resource call goes through [`ApiClient::request`], which attaches
//! the bearer token, classifies the HTTP status and unwraps the
//! `{ success, data }` envelope. Resource modules only supply method, path
//! and body.

pub mod client;
pub mod error;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use client::{decode_body, unwrap_envelope, ApiClient};
pub use error::{ApiError, ApiResult};
pub use transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
