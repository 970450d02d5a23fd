use contracts::system::auth::{AdminLoginRequest, AdminLoginResponse, AdminUser};

use super::storage::SessionStore;
use crate::shared::api::{ApiClient, ApiError, ApiResult, HttpMethod};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Login with email and password
///
/// On success the token and profile are written to `store`. A 401 from the
/// login endpoint means bad credentials, not an expired session.
pub async fn login(
    client: &ApiClient,
    store: &dyn SessionStore,
    email: String,
    password: String,
) -> ApiResult<(String, AdminUser)> {
    let request = AdminLoginRequest { email, password };

    let response: AdminLoginResponse = client
        .request_anonymous(HttpMethod::Post, "/auth/admin/login", Some(&request))
        .await
        .map_err(|e| match e {
            ApiError::Unauthorized => ApiError::Rejected(INVALID_CREDENTIALS.to_string()),
            other => other,
        })?;

    let (token, user) = match (response.success, response.token, response.user) {
        (true, Some(token), Some(user)) if !token.is_empty() => (token, user),
        _ => {
            return Err(ApiError::Rejected(
                response
                    .message
                    .unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
            ))
        }
    };

    store.save(&token, &user);
    log::info!("Admin {} signed in", user.email);

    Ok((token, user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{ScriptedTransport, TEST_BASE};
    use crate::system::auth::storage::MemorySessionStore;

    #[tokio::test]
    async fn test_login_saves_session() {
        let transport = ScriptedTransport::new();
        transport.respond(
            200,
            r#"{"success":true,"token":"jwt-9","user":{"_id":"a1","name":"Root","email":"root@example.com","role":"admin"}}"#,
        );
        let client = ApiClient::new(TEST_BASE, transport.clone());
        let store = MemorySessionStore::new();

        let (token, user) = login(&client, &store, "root@example.com".into(), "pw".into())
            .await
            .unwrap();

        assert_eq!(token, "jwt-9");
        assert_eq!(user.display_name(), "Root");
        assert_eq!(store.token().as_deref(), Some("jwt-9"));
        assert_eq!(store.user(), Some(user));

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, format!("{}/auth/admin/login", TEST_BASE));
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"email":"root@example.com","password":"pw"}"#)
        );
    }

    #[tokio::test]
    async fn test_login_failure_is_rejected() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success":false,"message":"Invalid credentials"}"#);
        transport.respond(401, r#"{"success":false}"#);
        let client = ApiClient::new(TEST_BASE, transport.clone());
        let store = MemorySessionStore::new();

        let err = login(&client, &store, "a@b.c".into(), "x".into())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Invalid credentials".to_string()));

        let err = login(&client, &store, "a@b.c".into(), "x".into())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected(INVALID_CREDENTIALS.to_string()));

        assert_eq!(store.token(), None);
    }
}
