use contracts::dashboards::d401_automation_stats::dto::AutomationStats;

use crate::shared::api::{ApiClient, ApiResult};

const API_BASE: &str = "/admin/automation/stats";

/// Сводка по автоматизации
pub async fn get_automation_stats(client: &ApiClient, token: &str) -> ApiResult<AutomationStats> {
    let stats: Option<AutomationStats> = client.get(API_BASE, token).await?;
    Ok(stats.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{ScriptedTransport, TEST_BASE, TEST_TOKEN};
    use crate::shared::api::ApiError;

    #[tokio::test]
    async fn test_stats_and_expired_session() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success":true,"data":{"autoReplies":12,"responseTime":"2m"}}"#);
        transport.respond(401, "");
        let client = ApiClient::new(TEST_BASE, transport.clone());

        let stats = get_automation_stats(&client, TEST_TOKEN).await.unwrap();
        assert_eq!(stats.auto_replies, 12);

        let err = get_automation_stats(&client, TEST_TOKEN).await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
    }
}
