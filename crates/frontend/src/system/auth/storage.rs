use std::sync::Mutex;

use contracts::system::auth::AdminUser;
use web_sys::window;

use crate::shared::config::SessionConfig;

/// Persisted admin session: bearer token + JSON-serialized profile
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;

    /// Raw JSON of the stored profile
    fn user_json(&self) -> Option<String>;

    fn save_raw(&self, token: &str, user_json: &str);

    fn clear(&self);

    /// Stored profile; an unreadable profile counts as absent
    fn user(&self) -> Option<AdminUser> {
        let json = self.user_json()?;
        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Stored admin profile is not valid JSON: {}", e);
                None
            }
        }
    }

    fn save(&self, token: &str, user: &AdminUser) {
        match serde_json::to_string(user) {
            Ok(json) => self.save_raw(token, &json),
            Err(e) => log::error!("Failed to serialize admin profile: {}", e),
        }
    }
}

/// Token to resume with, if any
///
/// Empty tokens and leftovers of the old mock login (`stale_prefix`) are
/// purged from the store.
pub fn load_session(store: &dyn SessionStore, stale_prefix: &str) -> Option<String> {
    let token = store.token()?;
    let stale = !stale_prefix.is_empty() && token.starts_with(stale_prefix);
    if token.trim().is_empty() || stale {
        log::warn!("Discarding unusable stored admin token");
        store.clear();
        return None;
    }
    Some(token)
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Browser `localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageSession {
    token_key: String,
    user_key: String,
}

impl LocalStorageSession {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            token_key: config.token_key.clone(),
            user_key: config.user_key.clone(),
        }
    }
}

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Option<String> {
        get_local_storage()?.get_item(&self.token_key).ok()?
    }

    fn user_json(&self) -> Option<String> {
        get_local_storage()?.get_item(&self.user_key).ok()?
    }

    fn save_raw(&self, token: &str, user_json: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(&self.token_key, token);
            let _ = storage.set_item(&self.user_key, user_json);
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(&self.token_key);
            let _ = storage.remove_item(&self.user_key);
        }
    }
}

#[derive(Debug, Default)]
struct Stored {
    token: Option<String>,
    user_json: Option<String>,
}

/// In-process store, used outside the browser
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Stored>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.with_inner(|s| s.token = Some(token.to_string()));
        store
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut Stored) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.with_inner(|s| s.token.clone())
    }

    fn user_json(&self) -> Option<String> {
        self.with_inner(|s| s.user_json.clone())
    }

    fn save_raw(&self, token: &str, user_json: &str) {
        self.with_inner(|s| {
            s.token = Some(token.to_string());
            s.user_json = Some(user_json.to_string());
        })
    }

    fn clear(&self) {
        self.with_inner(|s| *s = Stored::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STALE: &str = "test-admin-token-";

    fn admin() -> AdminUser {
        AdminUser {
            id: "65f0c1".to_string(),
            name: Some("Ops".to_string()),
            email: "ops@example.com".to_string(),
            role: Some("admin".to_string()),
        }
    }

    #[test]
    fn test_save_and_read_back() {
        let store = MemorySessionStore::new();
        store.save("jwt-1", &admin());

        assert_eq!(store.token().as_deref(), Some("jwt-1"));
        assert_eq!(store.user(), Some(admin()));
        assert!(store.user_json().unwrap().contains("\"_id\":\"65f0c1\""));
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = MemorySessionStore::new();
        store.save("jwt-1", &admin());
        store.clear();

        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_garbage_profile_is_absent() {
        let store = MemorySessionStore::new();
        store.save_raw("jwt-1", "{not json");
        assert_eq!(store.user(), None);
        assert_eq!(store.token().as_deref(), Some("jwt-1"));
    }

    #[test]
    fn test_load_session_keeps_real_token() {
        let store = MemorySessionStore::with_token("eyJhbGciOi");
        assert_eq!(load_session(&store, STALE).as_deref(), Some("eyJhbGciOi"));
        assert!(store.token().is_some());
    }

    #[test]
    fn test_load_session_purges_stale_and_empty_tokens() {
        let store = MemorySessionStore::with_token("test-admin-token-1700000000");
        assert_eq!(load_session(&store, STALE), None);
        assert_eq!(store.token(), None);

        let store = MemorySessionStore::with_token("  ");
        assert_eq!(load_session(&store, STALE), None);
        assert_eq!(store.token(), None);

        assert_eq!(load_session(&MemorySessionStore::new(), STALE), None);
    }
}
