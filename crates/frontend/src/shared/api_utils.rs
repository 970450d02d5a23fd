//! API utilities for console-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::{config, AdminConfig};
use crate::shared::environment::{BrowserEnvironment, Environment, EnvironmentProvider};

/// API base URL for an environment
///
/// Production always talks to the production backend. Elsewhere the
/// build-time `ADMIN_API_URL` wins over the local origin.
///
/// # Returns
/// - `"https://backendmatrix.onrender.com/api"` in production
/// - `"http://localhost:5000/api"` locally (unless overridden)
pub fn api_base_for(config: &AdminConfig, environment: Environment) -> String {
    let backend = &config.backend;
    if !environment.is_production() {
        if let Some(url) = backend.api_url.as_deref() {
            return url.trim_end_matches('/').to_string();
        }
    }
    format!(
        "{}{}",
        backend.origin_for(environment).trim_end_matches('/'),
        backend.api_prefix
    )
}

/// API base URL for the current page
pub fn api_base() -> String {
    let config = config();
    let environment = BrowserEnvironment::new(&config.environment).environment();
    api_base_for(config, environment)
}

/// Append query parameters, skipping `None` values and percent-encoding the rest
///
/// # Example
/// ```rust,ignore
/// let path = with_query("/admin/suppliers", &[("status", Some("pending"))]);
/// assert_eq!(path, "/admin/suppliers?status=pending");
/// ```
pub fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query = params
        .iter()
        .filter_map(|(key, value)| {
            value.map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect::<Vec<_>>()
        .join("&");

    if query.is_empty() {
        path.to_string()
    } else {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", path, separator, query)
    }
}

/// Percent-encode one path segment (ids coming from records)
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
