use serde::{Deserialize, Serialize};

/// Счётчики заявок поставщиков для главной панели
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminStatistics {
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub total: u64,
}
