//! HTTP transport seam
//!
//! [`GlooTransport`] issues real `fetch` calls in the browser; tests plug in
//! a scripted implementation.

use async_trait::async_trait;
use gloo_net::http::{Method, RequestBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Header lookup, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

/// The request could not be completed at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Browser `fetch` via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = RequestBuilder::new(&request.url).method(request.method.into());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| TransportError(format!("Failed to build request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| TransportError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.map_err(|e| e.to_string());

        read_response(status, status_text, body)
    }
}

/// Assemble a response once the status is known. A failed body read only
/// aborts a 2xx; error statuses keep their status with an empty body.
pub fn read_response(
    status: u16,
    status_text: String,
    body: Result<String, String>,
) -> Result<HttpResponse, TransportError> {
    let body = match body {
        Ok(body) => body,
        Err(e) if (200..300).contains(&status) => {
            return Err(TransportError(format!("Failed to read response: {}", e)));
        }
        Err(e) => {
            log::warn!("Body of {} response could not be read: {}", status, e);
            String::new()
        }
    };

    Ok(HttpResponse {
        status,
        status_text,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_unauthorized_body_keeps_status() {
        let response =
            read_response(401, "Unauthorized".to_string(), Err("stream aborted".to_string()))
                .unwrap();
        assert_eq!(response.status, 401);
        assert_eq!(response.body, "");
    }

    #[test]
    fn test_unreadable_server_error_body_keeps_status() {
        let response = read_response(
            503,
            "Service Unavailable".to_string(),
            Err("stream aborted".to_string()),
        )
        .unwrap();
        assert_eq!(response.status, 503);
        assert_eq!(response.status_text, "Service Unavailable");
    }

    #[test]
    fn test_unreadable_success_body_is_transport_error() {
        let err = read_response(200, "OK".to_string(), Err("stream aborted".to_string()))
            .unwrap_err();
        assert_eq!(err.0, "Failed to read response: stream aborted");
    }

    #[test]
    fn test_readable_body_is_kept() {
        let response =
            read_response(200, "OK".to_string(), Ok(r#"{"id":"1"}"#.to_string())).unwrap();
        assert_eq!(response.body, r#"{"id":"1"}"#);
    }
}
