//! Asset URL resolution
//!
//! Image and document references stored by the backend come in several
//! shapes: CDN URLs, root-relative upload paths, server filesystem paths
//! that leaked into records, URLs pointing at a dev machine or at an old
//! backend host, and bare file names. [`UrlResolver`] maps all of them to
//! one URL the browser can load.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::shared::config::AdminConfig;
use crate::shared::environment::{Environment, EnvironmentProvider};

static LOCALHOST_ORIGIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"http://localhost:\d+").expect("localhost origin regex is valid") // Static pattern
});

static SCHEME_AND_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^/]+").expect("scheme/host regex is valid") // Static pattern
});

/// Resolver bound to one environment snapshot.
///
/// The environment is read once when the resolver is built, so a resolver
/// lives as long as a page context.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    environment: Environment,
    base_url: String,
    production_host: Option<String>,
    third_party_hosts: Vec<String>,
    upload_root: String,
    upload_marker: String,
}

impl UrlResolver {
    pub fn new(config: &AdminConfig, provider: &dyn EnvironmentProvider) -> Self {
        Self::for_environment(config, provider.environment())
    }

    pub fn for_environment(config: &AdminConfig, environment: Environment) -> Self {
        let upload_root = config.assets.upload_root.trim_end_matches('/').to_string();
        Self {
            environment,
            base_url: config
                .backend
                .origin_for(environment)
                .trim_end_matches('/')
                .to_string(),
            production_host: config.backend.production_host(),
            third_party_hosts: config
                .assets
                .third_party_hosts
                .iter()
                .filter(|h| !h.is_empty())
                .cloned()
                .collect(),
            upload_marker: format!("{}/", upload_root),
            upload_root,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Origin substituted into relative and misplaced URLs.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Canonical URL for `raw`; empty string for absent input.
    ///
    /// Rules are checked in order, first match wins.
    pub fn resolve(&self, raw: Option<&str>) -> String {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return String::new(),
        };

        if self.is_third_party(raw) {
            return raw.to_string();
        }

        if raw.starts_with(&self.upload_root) {
            return format!("{}{}", self.base_url, raw);
        }

        // Filesystem path with the upload root somewhere inside,
        // e.g. /opt/render/project/src/uploads/...
        if let Some(idx) = raw.find(&self.upload_marker) {
            return format!("{}{}", self.base_url, &raw[idx..]);
        }

        if raw.contains("localhost") {
            return LOCALHOST_ORIGIN
                .replace(raw, NoExpand(self.base_url.as_str()))
                .into_owned();
        }

        if raw.starts_with("http://") || raw.starts_with("https://") {
            if self.is_third_party(raw) {
                return raw.to_string();
            }
            if self.environment.is_production() && !self.points_at_production(raw) {
                return SCHEME_AND_HOST
                    .replace(raw, NoExpand(self.base_url.as_str()))
                    .into_owned();
            }
            return raw.to_string();
        }

        let separator = if raw.starts_with('/') { "" } else { "/" };
        format!("{}{}{}", self.base_url, separator, raw)
    }

    fn is_third_party(&self, raw: &str) -> bool {
        self.third_party_hosts.iter().any(|host| raw.contains(host.as_str()))
    }

    fn points_at_production(&self, raw: &str) -> bool {
        let Some(expected) = self.production_host.as_deref() else {
            return false;
        };
        match url::Url::parse(raw) {
            Ok(url) => {
                let host = match (url.host_str(), url.port()) {
                    (Some(host), Some(port)) => format!("{}:{}", host, port),
                    (Some(host), None) => host.to_string(),
                    (None, _) => return false,
                };
                host.eq_ignore_ascii_case(expected)
            }
            Err(_) => false,
        }
    }
}
