use std::sync::Arc;

use contracts::shared::envelope::{is_envelope, rejection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use super::transport::{GlooTransport, HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::shared::api_utils::api_base;

/// Client for the admin REST API
///
/// Cheap to clone; holds the API base URL (`{origin}/api`) and the transport.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Client for the current page: environment-selected base URL, `fetch` transport
    pub fn browser() -> Self {
        Self::new(api_base(), Arc::new(GlooTransport))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Authenticated call; the payload is unwrapped from `{ success, data }`
    /// when the body carries `data`, otherwise the whole body is decoded.
    pub async fn request<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        token: &str,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.send(method, path, Some(token), body).await?;
        unwrap_envelope(value)
    }

    /// Authenticated call decoding the whole body (for responses that keep
    /// extra members such as `stats` next to `data`).
    pub async fn request_raw<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        token: &str,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.send(method, path, Some(token), body).await?;
        decode_body(value)
    }

    /// Call without a bearer token (login)
    pub async fn request_anonymous<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.send(method, path, None, body).await?;
        decode_body(value)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, token: &str) -> ApiResult<T> {
        self.request::<T, ()>(HttpMethod::Get, path, token, None).await
    }

    pub async fn post<T, B>(&self, path: &str, token: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Post, path, token, Some(body)).await
    }

    /// POST without a body (actions such as `/assign`)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str, token: &str) -> ApiResult<T> {
        self.request::<T, ()>(HttpMethod::Post, path, token, None).await
    }

    pub async fn put<T, B>(&self, path: &str, token: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Put, path, token, Some(body)).await
    }

    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str, token: &str) -> ApiResult<T> {
        self.request::<T, ()>(HttpMethod::Put, path, token, None).await
    }

    pub async fn patch<T, B>(&self, path: &str, token: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(HttpMethod::Patch, path, token, Some(body)).await
    }

    /// DELETE, discarding whatever the server answers on success
    pub async fn delete(&self, path: &str, token: &str) -> ApiResult<()> {
        self.send::<()>(HttpMethod::Delete, path, Some(token), None)
            .await
            .and_then(|value| match rejection(&value) {
                Some(message) => Err(ApiError::Rejected(message)),
                None => Ok(()),
            })
    }

    async fn send<B>(
        &self,
        method: HttpMethod,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let mut headers = Vec::new();
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
        let body = match body {
            Some(body) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?)
            }
            None => None,
        };

        let request = HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        };

        log::debug!("{} {}", method.as_str(), path);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method.as_str(), path, e);
            ApiError::from(e)
        })?;

        classify(method, path, &response)?;
        parse_json(&response.body)
    }
}

fn classify(method: HttpMethod, path: &str, response: &HttpResponse) -> ApiResult<()> {
    match ApiError::from_status(response.status, &response.status_text) {
        None => Ok(()),
        Some(ApiError::Unauthorized) => {
            log::warn!("{} {} -> 401 Unauthorized, session expired", method.as_str(), path);
            Err(ApiError::Unauthorized)
        }
        Some(err) => {
            log::warn!("{} {} -> {}", method.as_str(), path, err);
            Err(err)
        }
    }
}

fn parse_json(body: &str) -> ApiResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode the `data` member when present, otherwise the whole body.
/// A body reporting `success: false` is a [`ApiError::Rejected`].
pub fn unwrap_envelope<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    if let Some(message) = rejection(&body) {
        return Err(ApiError::Rejected(message));
    }
    let payload = if is_envelope(&body) {
        body.get("data").cloned().unwrap_or(Value::Null)
    } else {
        body
    };
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode the whole body, still honouring `success: false`.
pub fn decode_body<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    if let Some(message) = rejection(&body) {
        return Err(ApiError::Rejected(message));
    }
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
