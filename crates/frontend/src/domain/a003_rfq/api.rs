use contracts::domain::a003_rfq::aggregate::{Rfq, RfqListResponse};

use crate::shared::api::{ApiClient, ApiResult, HttpMethod};

const API_BASE: &str = "/admin/rfqs";

/// Все RFQ; список приходит в `data` или в `rfqs`
pub async fn list_rfqs(client: &ApiClient, token: &str) -> ApiResult<Vec<Rfq>> {
    let body: RfqListResponse = client
        .request_raw::<_, ()>(HttpMethod::Get, API_BASE, token, None)
        .await?;
    Ok(body.into_items())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{ScriptedTransport, TEST_BASE, TEST_TOKEN};

    #[tokio::test]
    async fn test_list_rfqs_from_rfqs_member() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success":true,"rfqs":[{"_id":"r1","material":"steel"}]}"#);
        let client = ApiClient::new(TEST_BASE, transport.clone());

        let rfqs = list_rfqs(&client, TEST_TOKEN).await.unwrap();

        assert_eq!(rfqs.len(), 1);
        assert_eq!(rfqs[0].field_str("material"), Some("steel"));
    }
}
