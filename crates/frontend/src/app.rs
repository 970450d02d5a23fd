use std::sync::Arc;

use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::api::ApiClient;
use crate::shared::asset_url::UrlResolver;
use crate::shared::config::config;
use crate::shared::environment::BrowserEnvironment;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::storage::{LocalStorageSession, SessionStore};

/// Capabilities shared by every page
#[derive(Clone)]
pub struct AppServices {
    pub api: ApiClient,
    pub assets: UrlResolver,
    pub session: Arc<dyn SessionStore>,
}

impl AppServices {
    /// Browser wiring: fetch transport, hostname-based environment, localStorage
    pub fn browser() -> Self {
        let config = config();
        let environment = BrowserEnvironment::new(&config.environment);
        Self {
            api: ApiClient::browser(),
            assets: UrlResolver::new(config, &environment),
            session: Arc::new(LocalStorageSession::new(&config.session)),
        }
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices context not found")
}

#[component]
pub fn App() -> impl IntoView {
    let services = AppServices::browser();
    log::info!(
        "Admin console started ({:?}), API at {}",
        services.assets.environment(),
        services.api.base_url()
    );
    provide_context(services);

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
