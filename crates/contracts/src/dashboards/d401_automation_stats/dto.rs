use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutomationStats {
    pub auto_replies: u64,
    pub lead_scores: u64,
    pub orders_processed: u64,
    pub emails_sent: u64,
    pub response_time: String,
    pub conversion_rate: String,
}
