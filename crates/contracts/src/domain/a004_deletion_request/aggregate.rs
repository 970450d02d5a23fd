use serde::{Deserialize, Serialize};

/// Что просит удалить пользователь (GDPR)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletionRequestType {
    Account,
    Data,
}

impl DeletionRequestType {
    pub fn code(&self) -> &'static str {
        match self {
            DeletionRequestType::Account => "account",
            DeletionRequestType::Data => "data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletionUserType {
    Buyer,
    Supplier,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeletionStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl DeletionStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DeletionStatus::Pending => "pending",
            DeletionStatus::InProgress => "in-progress",
            DeletionStatus::Completed => "completed",
            DeletionStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedBy {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionRequest {
    #[serde(rename = "_id")]
    pub id: String,
    pub request_type: DeletionRequestType,
    pub user_type: DeletionUserType,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub data_types: Vec<String>,
    #[serde(default)]
    pub status: DeletionStatus,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub processed_at: Option<String>,
    #[serde(default)]
    pub processed_by: Option<ProcessedBy>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl DeletionRequest {
    /// Account requests that are not completed yet may be processed.
    pub fn can_process(&self) -> bool {
        self.request_type == DeletionRequestType::Account && self.status != DeletionStatus::Completed
    }
}

/// Фильтры списка; `None` означает без фильтра
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletionRequestFilter {
    pub status: Option<DeletionStatus>,
    pub request_type: Option<DeletionRequestType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeletionStatusRequest {
    pub status: DeletionStatus,
    pub admin_notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDeletionResponse {
    #[serde(default)]
    pub account_deleted: bool,
    #[serde(default)]
    pub message: Option<String>,
}
