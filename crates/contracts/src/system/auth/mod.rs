use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Ответ `POST /auth/admin/login`.
///
/// On failure the backend answers `{ "success": false, "message": ... }`
/// without token and user, hence the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AdminUser>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Профиль администратора, хранится в localStorage как JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl AdminUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}
