use contracts::domain::a005_material_inquiry::aggregate::{
    AddQuoteRequest, MaterialInquiry, MaterialInquiryListResponse, MaterialInquiryStatus,
    UpdateMaterialInquiryStatusRequest,
};

use crate::shared::api::{ApiClient, ApiResult, HttpMethod};
use crate::shared::api_utils::segment;

const API_BASE: &str = "/material-inquiries/admin";

/// Все запросы материалов вместе со счётчиками
pub async fn list_material_inquiries(
    client: &ApiClient,
    token: &str,
) -> ApiResult<MaterialInquiryListResponse> {
    client
        .request_raw::<_, ()>(HttpMethod::Get, &format!("{}/all", API_BASE), token, None)
        .await
}

pub async fn update_material_inquiry_status(
    client: &ApiClient,
    token: &str,
    id: &str,
    status: MaterialInquiryStatus,
    admin_notes: Option<String>,
) -> ApiResult<MaterialInquiry> {
    let body = UpdateMaterialInquiryStatusRequest {
        status,
        admin_notes,
    };
    client
        .patch(
            &format!("{}/{}/status", API_BASE, segment(id)),
            token,
            &body,
        )
        .await
}

/// Добавить котировку поставщика
pub async fn add_quote(
    client: &ApiClient,
    token: &str,
    id: &str,
    quote: &AddQuoteRequest,
) -> ApiResult<MaterialInquiry> {
    client
        .post(&format!("{}/{}/quote", API_BASE, segment(id)), token, quote)
        .await
}

pub async fn delete_material_inquiry(client: &ApiClient, token: &str, id: &str) -> ApiResult<()> {
    client
        .delete(&format!("{}/{}", API_BASE, segment(id)), token)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{ScriptedTransport, TEST_BASE, TEST_TOKEN};

    #[tokio::test]
    async fn test_list_keeps_stats() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"{"success":true,"data":[],"stats":{"total":4,"new":2}}"#);
        let client = ApiClient::new(TEST_BASE, transport.clone());

        let body = list_material_inquiries(&client, TEST_TOKEN).await.unwrap();

        assert!(body.data.is_empty());
        assert_eq!(body.stats.total, 4);
        assert_eq!(
            transport.last_request().unwrap().url,
            format!("{}/material-inquiries/admin/all", TEST_BASE)
        );
    }

    #[tokio::test]
    async fn test_add_quote_posts_body() {
        let transport = ScriptedTransport::new();
        transport.fail("connection refused");
        let client = ApiClient::new(TEST_BASE, transport.clone());

        let quote = AddQuoteRequest {
            supplier_id: "s1".to_string(),
            supplier_name: "Acme".to_string(),
            quoted_price: 1250.0,
            valid_until: None,
            notes: None,
        };
        let err = add_quote(&client, TEST_TOKEN, "m1", &quote).await.unwrap_err();

        assert!(matches!(err, crate::shared::api::ApiError::Network(_)));
        let request = transport.last_request().unwrap();
        assert_eq!(
            request.url,
            format!("{}/material-inquiries/admin/m1/quote", TEST_BASE)
        );
        assert_eq!(
            request.body.as_deref(),
            Some(r#"{"supplierId":"s1","supplierName":"Acme","quotedPrice":1250.0}"#)
        );
    }
}
