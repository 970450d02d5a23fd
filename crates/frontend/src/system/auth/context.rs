use contracts::system::auth::AdminUser;
use leptos::prelude::*;

use super::session::{SessionEvent, SessionPhase};
use super::storage::{load_session, SessionStore};
use crate::app::{use_services, AppServices};
use crate::shared::api::ApiError;
use crate::shared::config::config;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub phase: SessionPhase,
    pub token: Option<String>,
    pub user: Option<AdminUser>,
}

impl AuthState {
    /// State for a page load: authenticated when a usable token is stored
    pub fn restore(store: &dyn SessionStore, stale_prefix: &str) -> Self {
        match load_session(store, stale_prefix) {
            Some(token) => Self::signed_in(token, store.user()),
            None => Self::default(),
        }
    }

    pub fn signed_in(token: String, user: Option<AdminUser>) -> Self {
        Self {
            phase: SessionPhase::Anonymous.apply(SessionEvent::LoginSucceeded),
            token: Some(token),
            user,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase.is_authenticated() && self.token.is_some()
    }

    /// Bearer token for API calls; empty when signed out (the backend answers 401)
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }

    fn drop_credentials(&mut self) {
        self.token = None;
        self.user = None;
    }
}

/// Reaction to a failed API call
///
/// `Unauthorized` clears the stored session and walks the phase through
/// `Expired` to `Anonymous`, which brings the login page back; returns `None`.
/// Every other error yields the notification text.
pub fn handle_api_error(
    err: &ApiError,
    store: &dyn SessionStore,
    state: &mut AuthState,
) -> Option<String> {
    if !err.is_unauthorized() {
        return Some(err.user_message());
    }

    if state.phase.is_authenticated() {
        log::warn!("Session expired, clearing stored admin session");
    }
    store.clear();
    state.phase = state
        .phase
        .apply(SessionEvent::Unauthorized)
        .apply(SessionEvent::Cleared);
    state.drop_credentials();
    None
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let services = use_services();
    let initial = AuthState::restore(
        services.session.as_ref(),
        &config().session.stale_token_prefix,
    );
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// [`handle_api_error`] against the live auth signal
///
/// Signals and services are captured by the caller before any `.await`.
pub fn report_api_error(
    err: &ApiError,
    services: &AppServices,
    set_auth_state: WriteSignal<AuthState>,
) -> Option<String> {
    let mut message = None;
    set_auth_state.update(|state| {
        message = handle_api_error(err, services.session.as_ref(), state);
    });
    message
}

/// Helper: Perform logout
pub fn do_logout(services: &AppServices, set_auth_state: WriteSignal<AuthState>) {
    services.session.clear();
    set_auth_state.update(|state| {
        state.phase = state.phase.apply(SessionEvent::LoggedOut);
        state.drop_credentials();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemorySessionStore;

    const STALE: &str = "test-admin-token-";

    fn signed_in_store() -> MemorySessionStore {
        let store = MemorySessionStore::new();
        store.save(
            "jwt-1",
            &AdminUser {
                id: "1".to_string(),
                name: None,
                email: "admin@example.com".to_string(),
                role: None,
            },
        );
        store
    }

    #[test]
    fn test_restore_from_store() {
        let store = signed_in_store();
        let state = AuthState::restore(&store, STALE);

        assert!(state.is_authenticated());
        assert_eq!(state.token(), "jwt-1");
        assert_eq!(state.user.unwrap().email, "admin@example.com");
    }

    #[test]
    fn test_restore_without_token_is_anonymous() {
        let state = AuthState::restore(&MemorySessionStore::new(), STALE);
        assert_eq!(state, AuthState::default());
        assert_eq!(state.token(), "");
    }

    #[test]
    fn test_unauthorized_clears_session() {
        let store = signed_in_store();
        let mut state = AuthState::restore(&store, STALE);

        let message = handle_api_error(&ApiError::Unauthorized, &store, &mut state);

        assert_eq!(message, None);
        assert_eq!(state.phase, SessionPhase::Anonymous);
        assert_eq!(state.token, None);
        assert_eq!(store.token(), None);
        assert_eq!(store.user_json(), None);
    }

    #[test]
    fn test_repeated_unauthorized_is_harmless() {
        let store = signed_in_store();
        let mut state = AuthState::restore(&store, STALE);

        handle_api_error(&ApiError::Unauthorized, &store, &mut state);
        let message = handle_api_error(&ApiError::Unauthorized, &store, &mut state);

        assert_eq!(message, None);
        assert_eq!(state.phase, SessionPhase::Anonymous);
    }

    #[test]
    fn test_other_errors_keep_session() {
        let store = signed_in_store();
        let mut state = AuthState::restore(&store, STALE);

        let message = handle_api_error(
            &ApiError::Http {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            },
            &store,
            &mut state,
        );
        assert_eq!(
            message.as_deref(),
            Some("Server returned 500: Internal Server Error")
        );

        let message = handle_api_error(&ApiError::Network("refused".to_string()), &store, &mut state);
        assert_eq!(message.as_deref(), Some("Backend server is not reachable"));

        assert!(state.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("jwt-1"));
    }
}
