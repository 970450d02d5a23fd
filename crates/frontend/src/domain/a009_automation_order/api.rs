use contracts::domain::a009_automation_order::aggregate::{
    AutomationOrder, AutomationOrderStatus, UpdateOrderStatusRequest,
};

use crate::shared::api::{ApiClient, ApiResult};
use crate::shared::api_utils::{segment, with_query};

const API_BASE: &str = "/admin/automation/orders";

pub async fn list_orders(
    client: &ApiClient,
    token: &str,
    status: Option<AutomationOrderStatus>,
) -> ApiResult<Vec<AutomationOrder>> {
    let path = with_query(API_BASE, &[("status", status.map(|s| s.code()))]);
    let items: Option<Vec<AutomationOrder>> = client.get(&path, token).await?;
    Ok(items.unwrap_or_default())
}

pub async fn get_order(client: &ApiClient, token: &str, id: &str) -> ApiResult<AutomationOrder> {
    client
        .get(&format!("{}/{}", API_BASE, segment(id)), token)
        .await
}

/// Запустить автоматическую обработку заказа
pub async fn auto_process_order(
    client: &ApiClient,
    token: &str,
    id: &str,
) -> ApiResult<AutomationOrder> {
    client
        .post_empty(&format!("{}/{}/auto-process", API_BASE, segment(id)), token)
        .await
}

pub async fn update_order_status(
    client: &ApiClient,
    token: &str,
    id: &str,
    status: AutomationOrderStatus,
) -> ApiResult<AutomationOrder> {
    client
        .put(
            &format!("{}/{}", API_BASE, segment(id)),
            token,
            &UpdateOrderStatusRequest { status },
        )
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{ScriptedTransport, TEST_BASE, TEST_TOKEN};
    use crate::shared::api::HttpMethod;

    const ORDER: &str = r#"{"success":true,"data":{"id":"o1","supplier":"Acme","product":"Rebar","status":"processed","autoProcessed":true,"automationScore":92}}"#;

    #[tokio::test]
    async fn test_auto_process() {
        let transport = ScriptedTransport::new();
        transport.respond(200, ORDER);
        let client = ApiClient::new(TEST_BASE, transport.clone());

        let order = auto_process_order(&client, TEST_TOKEN, "o1").await.unwrap();

        assert!(order.auto_processed);
        assert_eq!(order.status, AutomationOrderStatus::Processed);
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.url,
            format!("{}/admin/automation/orders/o1/auto-process", TEST_BASE)
        );
    }

    #[tokio::test]
    async fn test_list_filtered_and_update() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success":true,"data":[]}"#);
        transport.respond(200, ORDER);
        let client = ApiClient::new(TEST_BASE, transport.clone());

        list_orders(&client, TEST_TOKEN, Some(AutomationOrderStatus::Pending))
            .await
            .unwrap();
        update_order_status(&client, TEST_TOKEN, "o1", AutomationOrderStatus::Fulfilled)
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(
            requests[0].url,
            format!("{}/admin/automation/orders?status=pending", TEST_BASE)
        );
        assert_eq!(requests[1].method, HttpMethod::Put);
        assert_eq!(requests[1].body.as_deref(), Some(r#"{"status":"fulfilled"}"#));
    }
}
