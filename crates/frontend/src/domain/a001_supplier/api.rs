use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierStatus};
use contracts::shared::moderation::{ModerationResponse, RejectRequest};

use crate::shared::api::{ApiClient, ApiError, ApiResult, HttpMethod};
use crate::shared::api_utils::{segment, with_query};

const API_BASE: &str = "/admin/suppliers";

/// Заявки поставщиков; `None` означает все статусы
pub async fn list_suppliers(
    client: &ApiClient,
    token: &str,
    status: Option<SupplierStatus>,
) -> ApiResult<Vec<Supplier>> {
    let path = with_query(API_BASE, &[("status", status.map(|s| s.code()))]);
    let items: Option<Vec<Supplier>> = client.get(&path, token).await?;
    Ok(items.unwrap_or_default())
}

/// Одобрить заявку поставщика
pub async fn approve_supplier(
    client: &ApiClient,
    token: &str,
    id: &str,
) -> ApiResult<ModerationResponse> {
    let path = format!("{}/{}/approve", API_BASE, segment(id));
    client
        .request_raw::<_, ()>(HttpMethod::Put, &path, token, None)
        .await
}

/// Отклонить заявку; причина обязательна
pub async fn reject_supplier(
    client: &ApiClient,
    token: &str,
    id: &str,
    reason: &str,
) -> ApiResult<ModerationResponse> {
    let reason = require_reason(reason)?;
    let path = format!("{}/{}/reject", API_BASE, segment(id));
    client
        .request_raw(HttpMethod::Put, &path, token, Some(&RejectRequest { reason }))
        .await
}

/// Trimmed rejection reason, refused when blank
pub(crate) fn require_reason(reason: &str) -> ApiResult<String> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ApiError::Invalid(
            "Please provide a rejection reason".to_string(),
        ));
    }
    Ok(reason.to_string())
}
