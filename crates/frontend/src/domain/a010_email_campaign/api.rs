use contracts::domain::a010_email_campaign::aggregate::{
    CreateEmailTemplateRequest, EmailTemplate, SendCampaignRequest, SendCampaignResponse,
};

use crate::shared::api::{ApiClient, ApiError, ApiResult, HttpMethod};

const API_BASE: &str = "/admin/automation";

/// Отправить email-рассылку
pub async fn send_campaign(
    client: &ApiClient,
    token: &str,
    campaign: &SendCampaignRequest,
) -> ApiResult<SendCampaignResponse> {
    if campaign.recipients.is_empty() {
        return Err(ApiError::Invalid("Add at least one recipient".to_string()));
    }
    client
        .request_raw(
            HttpMethod::Post,
            &format!("{}/email-campaign", API_BASE),
            token,
            Some(campaign),
        )
        .await
}

pub async fn list_email_templates(client: &ApiClient, token: &str) -> ApiResult<Vec<EmailTemplate>> {
    let items: Option<Vec<EmailTemplate>> = client
        .get(&format!("{}/email-templates", API_BASE), token)
        .await?;
    Ok(items.unwrap_or_default())
}

pub async fn create_email_template(
    client: &ApiClient,
    token: &str,
    template: &CreateEmailTemplateRequest,
) -> ApiResult<EmailTemplate> {
    client
        .post(&format!("{}/email-templates", API_BASE), token, template)
        .await
}
