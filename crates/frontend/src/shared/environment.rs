//! Runtime environment classification
//!
//! The console only distinguishes the production deployment from
//! everything else (local development, previews on unknown hosts).

use crate::shared::config::EnvironmentConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Production,
    Local,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Source of the current [`Environment`]
pub trait EnvironmentProvider {
    fn environment(&self) -> Environment;
}

/// Classifies `window.location.hostname` against the production allow-list.
pub struct BrowserEnvironment {
    config: EnvironmentConfig,
}

impl BrowserEnvironment {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

fn current_hostname() -> Option<String> {
    web_sys::window()?.location().hostname().ok()
}

impl EnvironmentProvider for BrowserEnvironment {
    fn environment(&self) -> Environment {
        match current_hostname() {
            Some(hostname) => self.config.classify(&hostname),
            None => Environment::Local,
        }
    }
}

/// Fixed classification, for tests and non-browser hosts
#[derive(Debug, Clone, Copy)]
pub struct FixedEnvironment(pub Environment);

impl EnvironmentProvider for FixedEnvironment {
    fn environment(&self) -> Environment {
        self.0
    }
}
