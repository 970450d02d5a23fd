pub mod a001_supplier;
pub mod a002_product;
pub mod a003_rfq;
pub mod a004_deletion_request;
pub mod a005_material_inquiry;
pub mod a006_product_inquiry;
pub mod a007_auto_reply;
pub mod a008_lead;
pub mod a009_automation_order;
pub mod a010_email_campaign;
pub mod a011_inventory;
pub mod a012_pricing;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::shared::api::testing::{ScriptedTransport, TEST_BASE, TEST_TOKEN};
    use crate::shared::api::{ApiClient, ApiError};

    fn expired_client() -> (Arc<ScriptedTransport>, ApiClient) {
        let transport = ScriptedTransport::always(401, r#"{"message":"Token expired"}"#);
        let client = ApiClient::new(TEST_BASE, transport.clone());
        (transport, client)
    }

    fn assert_unauthorized<T: std::fmt::Debug>(result: Result<T, ApiError>) {
        assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    }

    #[tokio::test]
    async fn test_every_family_reports_unauthorized_on_401() {
        use contracts::domain::a004_deletion_request::aggregate::{
            DeletionRequestFilter, DeletionStatus,
        };
        use contracts::domain::a007_auto_reply::aggregate::AutoReplyPatch;
        use contracts::domain::a009_automation_order::aggregate::AutomationOrderStatus;
        use contracts::domain::a010_email_campaign::aggregate::CreateEmailTemplateRequest;

        let (transport, client) = expired_client();
        let c = &client;
        let t = TEST_TOKEN;

        assert_unauthorized(super::a001_supplier::api::list_suppliers(c, t, None).await);
        assert_unauthorized(super::a001_supplier::api::approve_supplier(c, t, "s1").await);
        assert_unauthorized(super::a001_supplier::api::reject_supplier(c, t, "s1", "no docs").await);
        assert_unauthorized(super::a002_product::api::list_products(c, t, None).await);
        assert_unauthorized(super::a002_product::api::approve_product(c, t, "p1").await);
        assert_unauthorized(super::a002_product::api::delete_product(c, t, "p1").await);
        assert_unauthorized(super::a003_rfq::api::list_rfqs(c, t).await);
        assert_unauthorized(
            super::a004_deletion_request::api::list_deletion_requests(
                c,
                t,
                &DeletionRequestFilter::default(),
            )
            .await,
        );
        assert_unauthorized(
            super::a004_deletion_request::api::update_deletion_status(
                c,
                t,
                "d1",
                DeletionStatus::Completed,
                "",
            )
            .await,
        );
        assert_unauthorized(super::a004_deletion_request::api::process_deletion_request(c, t, "d1").await);
        assert_unauthorized(super::a005_material_inquiry::api::list_material_inquiries(c, t).await);
        assert_unauthorized(super::a005_material_inquiry::api::delete_material_inquiry(c, t, "m1").await);
        assert_unauthorized(super::a006_product_inquiry::api::list_product_inquiries(c, t).await);
        assert_unauthorized(super::a006_product_inquiry::api::delete_product_inquiry(c, t, "q1").await);
        assert_unauthorized(super::a007_auto_reply::api::list_auto_replies(c, t).await);
        assert_unauthorized(
            super::a007_auto_reply::api::update_auto_reply(c, t, "ar1", &AutoReplyPatch::default())
                .await,
        );
        assert_unauthorized(super::a007_auto_reply::api::delete_auto_reply(c, t, "ar1").await);
        assert_unauthorized(super::a008_lead::api::list_leads(c, t).await);
        assert_unauthorized(super::a008_lead::api::get_lead(c, t, "l1").await);
        assert_unauthorized(super::a008_lead::api::assign_to_sales(c, t, "l1").await);
        assert_unauthorized(super::a008_lead::api::rescore_lead(c, t, "l1").await);
        assert_unauthorized(
            super::a009_automation_order::api::list_orders(c, t, Some(AutomationOrderStatus::Pending))
                .await,
        );
        assert_unauthorized(super::a009_automation_order::api::get_order(c, t, "o1").await);
        assert_unauthorized(super::a009_automation_order::api::auto_process_order(c, t, "o1").await);
        assert_unauthorized(super::a010_email_campaign::api::list_email_templates(c, t).await);
        assert_unauthorized(
            super::a010_email_campaign::api::create_email_template(
                c,
                t,
                &CreateEmailTemplateRequest {
                    name: "n".to_string(),
                    subject: "s".to_string(),
                    body: "b".to_string(),
                },
            )
            .await,
        );
        assert_unauthorized(super::a011_inventory::api::list_inventory(c, t).await);
        assert_unauthorized(super::a012_pricing::api::list_price_recommendations(c, t).await);

        assert!(transport
            .requests()
            .iter()
            .all(|r| r.header("Authorization") == Some("Bearer token-abc")));
    }
}
