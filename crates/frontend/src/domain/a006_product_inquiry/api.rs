use contracts::domain::a006_product_inquiry::aggregate::{
    ProductInquiry, ProductInquiryListResponse, ProductInquiryStatus,
    UpdateProductInquiryStatusRequest,
};

use crate::shared::api::{ApiClient, ApiResult, HttpMethod};
use crate::shared::api_utils::segment;

const API_BASE: &str = "/product-inquiries";

/// Все запросы по товарам вместе со счётчиками
pub async fn list_product_inquiries(
    client: &ApiClient,
    token: &str,
) -> ApiResult<ProductInquiryListResponse> {
    client
        .request_raw::<_, ()>(HttpMethod::Get, &format!("{}/admin/all", API_BASE), token, None)
        .await
}

pub async fn update_product_inquiry_status(
    client: &ApiClient,
    token: &str,
    id: &str,
    status: ProductInquiryStatus,
) -> ApiResult<ProductInquiry> {
    client
        .patch(
            &format!("{}/{}/status", API_BASE, segment(id)),
            token,
            &UpdateProductInquiryStatusRequest { status },
        )
        .await
}

pub async fn delete_product_inquiry(client: &ApiClient, token: &str, id: &str) -> ApiResult<()> {
    client
        .delete(&format!("{}/{}", API_BASE, segment(id)), token)
        .await
}
