use contracts::domain::a011_inventory::aggregate::InventoryItem;

use crate::shared::api::{ApiClient, ApiResult};

const API_BASE: &str = "/admin/automation/inventory";

/// Складские остатки с прогнозом
pub async fn list_inventory(client: &ApiClient, token: &str) -> ApiResult<Vec<InventoryItem>> {
    let items: Option<Vec<InventoryItem>> = client.get(API_BASE, token).await?;
    Ok(items.unwrap_or_default())
}
