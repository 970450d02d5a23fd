use contracts::domain::a008_lead::aggregate::{Lead, RescoreResponse};

use crate::shared::api::{ApiClient, ApiResult, HttpMethod};
use crate::shared::api_utils::segment;

const API_BASE: &str = "/admin/automation/leads";

/// Лиды с оценками, посчитанными на backend
pub async fn list_leads(client: &ApiClient, token: &str) -> ApiResult<Vec<Lead>> {
    let items: Option<Vec<Lead>> = client.get(API_BASE, token).await?;
    Ok(items.unwrap_or_default())
}

pub async fn get_lead(client: &ApiClient, token: &str, id: &str) -> ApiResult<Lead> {
    client
        .get(&format!("{}/{}", API_BASE, segment(id)), token)
        .await
}

/// Передать лида в отдел продаж
pub async fn assign_to_sales(client: &ApiClient, token: &str, id: &str) -> ApiResult<()> {
    let _: serde_json::Value = client
        .request_raw::<_, ()>(
            HttpMethod::Post,
            &format!("{}/{}/assign", API_BASE, segment(id)),
            token,
            None,
        )
        .await?;
    Ok(())
}

/// Пересчитать оценку, вернуть новое значение (0 если backend не прислал)
pub async fn rescore_lead(client: &ApiClient, token: &str, id: &str) -> ApiResult<f64> {
    let response: RescoreResponse = client
        .post_empty(&format!("{}/{}/rescore", API_BASE, segment(id)), token)
        .await?;
    Ok(response.score.unwrap_or(0.0))
}
