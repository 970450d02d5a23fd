use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Статус модерации товара
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Pending,
    Active,
    Inactive,
    Rejected,
}

impl ProductStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProductStatus::Pending => "pending",
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Rejected => "rejected",
        }
    }
}

/// Поставщик, подставленный backend'ом (populate) в карточку товара
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSupplier {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPrice {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStock {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub minimum_order: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub supplier_id: ProductSupplier,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub specifications: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub price: ProductPrice,
    /// Raw image references; resolve before rendering.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub stock: ProductStock,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}
