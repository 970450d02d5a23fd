use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
}

/// Позиция склада (данные уже посчитаны backend'ом)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub product_name: String,
    #[serde(default)]
    pub supplier_name: String,
    #[serde(default)]
    pub stock_level: f64,
    #[serde(default)]
    pub min_threshold: f64,
    #[serde(default)]
    pub status: StockStatus,
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.status == StockStatus::LowStock
    }
}
