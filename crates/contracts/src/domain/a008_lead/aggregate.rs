use serde::{Deserialize, Serialize};

/// Температура лида, вычисляется на backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadTemperature {
    Hot,
    Warm,
    #[default]
    Cold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(alias = "_id")]
    pub id: String,
    pub company: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    /// Pre-computed score, never recalculated client-side.
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub status: LeadTemperature,
    #[serde(default)]
    pub potential: String,
    #[serde(default)]
    pub engagement: Option<f64>,
    #[serde(default)]
    pub inquiries: Option<u64>,
    #[serde(default)]
    pub last_contact: Option<String>,
}

/// `POST /leads/{id}/rescore` → `{ "score": n }`, где `score` может быть null
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RescoreResponse {
    #[serde(default)]
    pub score: Option<f64>,
}
