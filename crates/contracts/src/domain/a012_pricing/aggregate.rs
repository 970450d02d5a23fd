use serde::{Deserialize, Serialize};

/// Рекомендация цены; все значения приходят готовыми с backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRecommendation {
    #[serde(alias = "_id")]
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub recommended_price: f64,
    #[serde(default)]
    pub price_change_percentage: f64,
    /// Demand in percent.
    #[serde(default)]
    pub demand: f64,
    #[serde(default)]
    pub elasticity: Option<serde_json::Value>,
}

impl PriceRecommendation {
    pub fn is_high_demand(&self) -> bool {
        self.demand > 50.0
    }
}
