use contracts::dashboards::d400_admin_statistics::dto::AdminStatistics;

use crate::shared::api::{ApiClient, ApiResult};

const API_BASE: &str = "/admin/statistics";

/// Счётчики заявок поставщиков
pub async fn get_statistics(client: &ApiClient, token: &str) -> ApiResult<AdminStatistics> {
    let stats: Option<AdminStatistics> = client.get(API_BASE, token).await?;
    Ok(stats.unwrap_or_default())
}
