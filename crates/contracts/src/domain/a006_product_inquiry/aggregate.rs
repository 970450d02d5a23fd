use crate::shared::inquiry::{contains_ignore_case, InquiryPriority};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductInquiryStatus {
    #[default]
    New,
    Contacted,
    Quoted,
    Converted,
    Closed,
}

impl ProductInquiryStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProductInquiryStatus::New => "new",
            ProductInquiryStatus::Contacted => "contacted",
            ProductInquiryStatus::Quoted => "quoted",
            ProductInquiryStatus::Converted => "converted",
            ProductInquiryStatus::Closed => "closed",
        }
    }

    pub fn from_filter(code: &str) -> Option<Self> {
        match code {
            "new" => Some(ProductInquiryStatus::New),
            "contacted" => Some(ProductInquiryStatus::Contacted),
            "quoted" => Some(ProductInquiryStatus::Quoted),
            "converted" => Some(ProductInquiryStatus::Converted),
            "closed" => Some(ProductInquiryStatus::Closed),
            _ => None,
        }
    }
}

/// Заявка покупателя по конкретному товару
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInquiry {
    #[serde(rename = "_id")]
    pub id: String,
    pub inquiry_number: String,
    pub product_name: String,
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub specifications: Option<String>,
    #[serde(default)]
    pub status: ProductInquiryStatus,
    #[serde(default)]
    pub priority: InquiryPriority,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInquiryStats {
    pub total: u64,
    pub new: u64,
    pub contacted: u64,
    pub quoted: u64,
    pub converted: u64,
    pub closed: u64,
    pub urgent: u64,
    pub high: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductInquiryListResponse {
    #[serde(default)]
    pub data: Vec<ProductInquiry>,
    #[serde(default)]
    pub stats: ProductInquiryStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductInquiryStatusRequest {
    pub status: ProductInquiryStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductInquiryFilter {
    pub search: String,
    pub status: Option<ProductInquiryStatus>,
    pub priority: Option<InquiryPriority>,
}

impl ProductInquiryFilter {
    pub fn matches(&self, inquiry: &ProductInquiry) -> bool {
        let search = self.search.trim();
        if !search.is_empty() {
            let needle = search.to_lowercase();
            let hit = contains_ignore_case(&inquiry.inquiry_number, &needle)
                || contains_ignore_case(&inquiry.product_name, &needle)
                || contains_ignore_case(&inquiry.customer_name, &needle)
                || inquiry
                    .email
                    .as_deref()
                    .map(|e| contains_ignore_case(e, &needle))
                    .unwrap_or(false)
                || inquiry.phone.contains(search);
            if !hit {
                return false;
            }
        }
        self.status.map_or(true, |s| inquiry.status == s)
            && self.priority.map_or(true, |p| inquiry.priority == p)
    }

    pub fn apply<'a>(&self, items: &'a [ProductInquiry]) -> Vec<&'a ProductInquiry> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_matches_product_name_and_missing_email() {
        let items: Vec<ProductInquiry> = serde_json::from_value(json!([
            {
                "_id": "1", "inquiryNumber": "PI-1", "productName": "TMT Bars",
                "customerName": "Kiran", "phone": "99887", "priority": "high"
            },
            {
                "_id": "2", "inquiryNumber": "PI-2", "productName": "Cement",
                "customerName": "Meera", "phone": "11223", "email": "meera@tmt.test",
                "status": "contacted"
            }
        ]))
        .unwrap();

        let filter = ProductInquiryFilter {
            search: "tmt".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&items).len(), 2);

        let filter = ProductInquiryFilter {
            search: "tmt".to_string(),
            status: ProductInquiryStatus::from_filter("contacted"),
            priority: None,
        };
        let found = filter.apply(&items);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");

        let filter = ProductInquiryFilter {
            priority: InquiryPriority::from_filter("high"),
            ..Default::default()
        };
        assert_eq!(filter.apply(&items)[0].id, "1");
    }
}
