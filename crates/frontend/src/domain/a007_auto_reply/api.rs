use contracts::domain::a007_auto_reply::aggregate::{AutoReply, AutoReplyDraft, AutoReplyPatch};

use crate::shared::api::{ApiClient, ApiResult};
use crate::shared::api_utils::segment;

const API_BASE: &str = "/admin/automation/auto-replies";

pub async fn list_auto_replies(client: &ApiClient, token: &str) -> ApiResult<Vec<AutoReply>> {
    let items: Option<Vec<AutoReply>> = client.get(API_BASE, token).await?;
    Ok(items.unwrap_or_default())
}

pub async fn create_auto_reply(
    client: &ApiClient,
    token: &str,
    draft: &AutoReplyDraft,
) -> ApiResult<AutoReply> {
    client.post(API_BASE, token, draft).await
}

/// Частичное обновление (только заданные поля)
pub async fn update_auto_reply(
    client: &ApiClient,
    token: &str,
    id: &str,
    patch: &AutoReplyPatch,
) -> ApiResult<AutoReply> {
    client
        .put(&format!("{}/{}", API_BASE, segment(id)), token, patch)
        .await
}

pub async fn delete_auto_reply(client: &ApiClient, token: &str, id: &str) -> ApiResult<()> {
    client
        .delete(&format!("{}/{}", API_BASE, segment(id)), token)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_auto_reply::aggregate::AutoReplyStatus;
    use crate::shared::api::testing::{ScriptedTransport, TEST_BASE, TEST_TOKEN};
    use crate::shared::api::HttpMethod;

    #[tokio::test]
    async fn test_create_accepts_bare_entity() {
        let transport = ScriptedTransport::new();
        transport.respond(
            201,
            r#"{"id":"ar1","name":"Welcome","trigger":"new_inquiry","message":"Thanks!","status":"active"}"#,
        );
        let client = ApiClient::new(TEST_BASE, transport.clone());

        let draft = AutoReplyDraft {
            name: "Welcome".to_string(),
            trigger: "new_inquiry".to_string(),
            message: "Thanks!".to_string(),
            usage: None,
            status: AutoReplyStatus::Active,
        };
        let reply = create_auto_reply(&client, TEST_TOKEN, &draft).await.unwrap();

        assert_eq!(reply.id, "ar1");
        assert_eq!(transport.last_request().unwrap().method, HttpMethod::Post);
    }

    #[tokio::test]
    async fn test_update_accepts_envelope() {
        let transport = ScriptedTransport::new();
        transport.respond(
            200,
            r#"{"success":true,"data":{"_id":"ar1","name":"Welcome","trigger":"t","message":"m","status":"inactive"}}"#,
        );
        let client = ApiClient::new(TEST_BASE, transport.clone());

        let patch = AutoReplyPatch {
            status: Some(AutoReplyStatus::Inactive),
            ..Default::default()
        };
        let reply = update_auto_reply(&client, TEST_TOKEN, "ar1", &patch).await.unwrap();

        assert_eq!(reply.status, AutoReplyStatus::Inactive);
        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(
            request.url,
            format!("{}/admin/automation/auto-replies/ar1", TEST_BASE)
        );
        assert_eq!(request.body.as_deref(), Some(r#"{"status":"inactive"}"#));
    }
}
