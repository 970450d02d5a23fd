use contracts::domain::a002_product::aggregate::{Product, ProductStatus};
use contracts::shared::moderation::{ModerationResponse, RejectRequest};

use crate::domain::a001_supplier::api::require_reason;
use crate::shared::api::{ApiClient, ApiResult, HttpMethod};
use crate::shared::api_utils::{segment, with_query};

const API_BASE: &str = "/admin/products";

/// Товары на модерации; `None` означает все статусы
pub async fn list_products(
    client: &ApiClient,
    token: &str,
    status: Option<ProductStatus>,
) -> ApiResult<Vec<Product>> {
    let path = with_query(API_BASE, &[("status", status.map(|s| s.code()))]);
    let items: Option<Vec<Product>> = client.get(&path, token).await?;
    Ok(items.unwrap_or_default())
}

pub async fn approve_product(
    client: &ApiClient,
    token: &str,
    id: &str,
) -> ApiResult<ModerationResponse> {
    let path = format!("{}/{}/approve", API_BASE, segment(id));
    client
        .request_raw::<_, ()>(HttpMethod::Put, &path, token, None)
        .await
}

pub async fn reject_product(
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

pub async fn delete_product(client: &ApiClient, token: &str, id: &str) -> ApiResult<()> {
    client
        .delete(&format!("{}/{}", API_BASE, segment(id)), token)
        .await
}
