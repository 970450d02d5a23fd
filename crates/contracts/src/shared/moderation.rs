use serde::{Deserialize, Serialize};

/// Тело запроса на отклонение (поставщика или товара)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

/// Ответ на approve/reject.
///
/// `emailSent` is reported by the backend when it tried to notify the
/// supplier; `Some(false)` means the decision was stored but the mail failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub email_sent: Option<bool>,
}

impl ModerationResponse {
    pub fn email_failed(&self) -> bool {
        self.email_sent == Some(false)
    }
}
