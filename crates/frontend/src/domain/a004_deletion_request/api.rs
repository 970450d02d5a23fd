use contracts::domain::a004_deletion_request::aggregate::{
    DeletionRequest, DeletionRequestFilter, DeletionStatus, ProcessDeletionResponse,
    UpdateDeletionStatusRequest,
};
use contracts::shared::envelope::Acknowledgement;

use crate::shared::api::{ApiClient, ApiResult, HttpMethod};
use crate::shared::api_utils::{segment, with_query};

const API_BASE: &str = "/privacy/deletion-requests";

/// Заявки на удаление данных (GDPR)
pub async fn list_deletion_requests(
    client: &ApiClient,
    token: &str,
    filter: &DeletionRequestFilter,
) -> ApiResult<Vec<DeletionRequest>> {
    let path = with_query(
        API_BASE,
        &[
            ("status", filter.status.map(|s| s.code())),
            ("requestType", filter.request_type.map(|t| t.code())),
        ],
    );
    let items: Option<Vec<DeletionRequest>> = client.get(&path, token).await?;
    Ok(items.unwrap_or_default())
}

pub async fn update_deletion_status(
    client: &ApiClient,
    token: &str,
    id: &str,
    status: DeletionStatus,
    admin_notes: &str,
) -> ApiResult<Acknowledgement> {
    let body = UpdateDeletionStatusRequest {
        status,
        admin_notes: admin_notes.to_string(),
    };
    client
        .request_raw(
            HttpMethod::Patch,
            &format!("{}/{}/status", API_BASE, segment(id)),
            token,
            Some(&body),
        )
        .await
}

/// Выполнить удаление аккаунта; на backend это необратимо
pub async fn process_deletion_request(
    client: &ApiClient,
    token: &str,
    id: &str,
) -> ApiResult<ProcessDeletionResponse> {
    let response: ProcessDeletionResponse = client
        .request_raw::<_, ()>(
            HttpMethod::Post,
            &format!("{}/{}/process", API_BASE, segment(id)),
            token,
            None,
        )
        .await?;
    if response.account_deleted {
        log::info!("Deletion request {} processed, account removed", id);
    }
    Ok(response)
}
