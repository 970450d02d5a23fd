use contracts::domain::a012_pricing::aggregate::PriceRecommendation;

use crate::shared::api::{ApiClient, ApiResult};

const API_BASE: &str = "/admin/automation/pricing";

/// Рекомендации по ценам (посчитаны заранее на backend)
pub async fn list_price_recommendations(
    client: &ApiClient,
    token: &str,
) -> ApiResult<Vec<PriceRecommendation>> {
    let items: Option<Vec<PriceRecommendation>> = client.get(API_BASE, token).await?;
    Ok(items.unwrap_or_default())
}
