use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoReplyStatus {
    #[default]
    Active,
    Inactive,
}

/// Шаблон автоответа на входящие запросы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoReply {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub trigger: String,
    pub message: String,
    #[serde(default)]
    pub usage: Option<u64>,
    #[serde(default)]
    pub status: AutoReplyStatus,
}

/// Новый автоответ (без id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoReplyDraft {
    pub name: String,
    pub trigger: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<u64>,
    pub status: AutoReplyStatus,
}

/// Частичное обновление: отправляются только заданные поля
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoReplyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AutoReplyStatus>,
}
