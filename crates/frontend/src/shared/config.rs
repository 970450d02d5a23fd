//! Console configuration
//!
//! A single source for backend origins, the production hostname allow-list,
//! asset URL markers and session storage keys. Defaults are embedded in the
//! bundle; a build may replace them through `ADMIN_CONSOLE_CONFIG` (a whole
//! TOML document) and point API calls elsewhere through `ADMIN_API_URL`.

use anyhow::{bail, Context};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::shared::environment::Environment;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AdminConfig {
    pub backend: BackendConfig,
    pub environment: EnvironmentConfig,
    pub assets: AssetConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    pub production_origin: String,
    pub local_origin: String,
    pub api_prefix: String,
    /// Full API base URL override (build-time `ADMIN_API_URL`).
    pub api_url: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            production_origin: "https://backendmatrix.onrender.com".to_string(),
            local_origin: "http://localhost:5000".to_string(),
            api_prefix: "/api".to_string(),
            api_url: None,
        }
    }
}

impl BackendConfig {
    pub fn origin_for(&self, environment: Environment) -> &str {
        match environment {
            Environment::Production => &self.production_origin,
            Environment::Local => &self.local_origin,
        }
    }

    /// Host (with port, if any) of the production backend.
    pub fn production_host(&self) -> Option<String> {
        let url = url::Url::parse(&self.production_origin).ok()?;
        let host = url.host_str()?;
        Some(match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        })
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Hostnames served by the production deployment. An entry matches the
    /// hostname itself and any of its subdomains.
    pub production_hosts: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            production_hosts: vec!["vercel.app".to_string(), "vercel.com".to_string()],
        }
    }
}

impl EnvironmentConfig {
    pub fn classify(&self, hostname: &str) -> Environment {
        let hostname = hostname.trim().trim_end_matches('.').to_ascii_lowercase();
        if hostname.is_empty() {
            return Environment::Local;
        }
        let production = self.production_hosts.iter().any(|entry| {
            let entry = entry.trim().trim_start_matches('.').to_ascii_lowercase();
            !entry.is_empty()
                && (hostname == entry || hostname.ends_with(&format!(".{}", entry)))
        });
        if production {
            Environment::Production
        } else {
            Environment::Local
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    /// Substrings identifying externally hosted assets that are never rewritten.
    pub third_party_hosts: Vec<String>,
    pub upload_root: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            third_party_hosts: vec!["cloudinary.com".to_string()],
            upload_root: "/uploads".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub token_key: String,
    pub user_key: String,
    /// Tokens issued by the old mock login; purged on load.
    pub stale_token_prefix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: "adminToken".to_string(),
            user_key: "adminUser".to_string(),
            stale_token_prefix: "test-admin-token-".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[backend]
production_origin = "https://backendmatrix.onrender.com"
local_origin = "http://localhost:5000"
api_prefix = "/api"

[environment]
production_hosts = ["vercel.app", "vercel.com"]

[assets]
third_party_hosts = ["cloudinary.com"]
upload_root = "/uploads"

[session]
token_key = "adminToken"
user_key = "adminUser"
stale_token_prefix = "test-admin-token-"
"#;

/// Parse and validate a TOML configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<AdminConfig> {
    let config: AdminConfig = toml::from_str(contents).context("Failed to parse console config")?;
    config.validate()?;
    Ok(config)
}

impl AdminConfig {
    fn validate(&self) -> anyhow::Result<()> {
        for (name, origin) in [
            ("backend.production_origin", &self.backend.production_origin),
            ("backend.local_origin", &self.backend.local_origin),
        ] {
            let url = url::Url::parse(origin).with_context(|| format!("{} is not a URL", name))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                bail!("{} must use http or https, got {}", name, url.scheme());
            }
        }
        if !self.backend.api_prefix.starts_with('/') {
            bail!("backend.api_prefix must start with '/'");
        }
        if !self.assets.upload_root.starts_with('/') || self.assets.upload_root.len() < 2 {
            bail!("assets.upload_root must be an absolute path segment");
        }
        Ok(())
    }
}

/// Load configuration
///
/// Order:
/// 1. `ADMIN_CONSOLE_CONFIG` captured at build time
/// 2. Embedded default config
///
/// `ADMIN_API_URL` is applied on top of either.
pub fn load_config() -> anyhow::Result<AdminConfig> {
    let mut config = match option_env!("ADMIN_CONSOLE_CONFIG") {
        Some(contents) => {
            log::info!("Loading console config from ADMIN_CONSOLE_CONFIG");
            parse_config(contents)?
        }
        None => parse_config(DEFAULT_CONFIG)?,
    };

    if let Some(api_url) = option_env!("ADMIN_API_URL").filter(|u| !u.trim().is_empty()) {
        config.backend.api_url = Some(api_url.trim().trim_end_matches('/').to_string());
    }

    Ok(config)
}

static CONFIG: Lazy<AdminConfig> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        log::error!("Invalid console configuration, using defaults: {:#}", e);
        AdminConfig::default()
    })
});

/// Process-wide configuration, loaded once
pub fn config() -> &'static AdminConfig {
    &CONFIG
}
