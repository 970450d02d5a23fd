use contracts::dashboards::d402_automation_analytics::dto::{
    AutomationMetrics, PerformanceReport, ReportPeriod, SystemHealth,
};

use crate::shared::api::{ApiClient, ApiResult};
use crate::shared::api_utils::with_query;

const API_BASE: &str = "/admin/automation";

pub async fn get_metrics(client: &ApiClient, token: &str) -> ApiResult<AutomationMetrics> {
    client.get(&format!("{}/metrics", API_BASE), token).await
}

/// Отчёт о производительности за период (по умолчанию месяц)
pub async fn get_performance_report(
    client: &ApiClient,
    token: &str,
    period: Option<ReportPeriod>,
) -> ApiResult<PerformanceReport> {
    let period = period.unwrap_or_default();
    let path = with_query(
        &format!("{}/performance", API_BASE),
        &[("period", Some(period.code()))],
    );
    client.get(&path, token).await
}

pub async fn get_system_health(client: &ApiClient, token: &str) -> ApiResult<SystemHealth> {
    client.get(&format!("{}/health", API_BASE), token).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{ScriptedTransport, TEST_BASE, TEST_TOKEN};
    use crate::shared::api::ApiError;
    use serde_json::json;

    #[tokio::test]
    async fn test_performance_defaults_to_month() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success":true,"data":{"responseRate":0.93}}"#);
        let client = ApiClient::new(TEST_BASE, transport.clone());

        let report = get_performance_report(&client, TEST_TOKEN, None).await.unwrap();

        assert_eq!(report, json!({"responseRate": 0.93}));
        assert_eq!(
            transport.last_request().unwrap().url,
            format!("{}/admin/automation/performance?period=month", TEST_BASE)
        );
    }

    #[tokio::test]
    async fn test_health_and_metrics() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"status":"ok"}"#);
        transport.respond_with(503, "Service Unavailable", "");
        let client = ApiClient::new(TEST_BASE, transport.clone());

        let health = get_system_health(&client, TEST_TOKEN).await.unwrap();
        assert_eq!(health["status"], "ok");

        let err = get_metrics(&client, TEST_TOKEN).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 503,
                status_text: "Service Unavailable".to_string()
            }
        );
    }
}
