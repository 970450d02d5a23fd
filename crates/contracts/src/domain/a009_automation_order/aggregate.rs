use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationOrderStatus {
    #[default]
    Pending,
    Processing,
    Processed,
    Fulfilled,
}

impl AutomationOrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AutomationOrderStatus::Pending => "pending",
            AutomationOrderStatus::Processing => "processing",
            AutomationOrderStatus::Processed => "processed",
            AutomationOrderStatus::Fulfilled => "fulfilled",
        }
    }
}

/// Заказ в панели автоматизации заказов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationOrder {
    #[serde(alias = "_id")]
    pub id: String,
    pub supplier: String,
    pub product: String,
    #[serde(default)]
    pub status: AutomationOrderStatus,
    #[serde(default)]
    pub auto_processed: bool,
    #[serde(default)]
    pub automation_score: f64,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub ordered_at: Option<String>,
    #[serde(default)]
    pub estimated_delivery: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: AutomationOrderStatus,
}
