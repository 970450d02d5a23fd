use crate::shared::inquiry::{contains_ignore_case, InquiryPriority};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialInquiryStatus {
    #[default]
    New,
    UnderReview,
    Quoted,
    Negotiating,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl MaterialInquiryStatus {
    pub fn code(&self) -> &'static str {
        match self {
            MaterialInquiryStatus::New => "new",
            MaterialInquiryStatus::UnderReview => "under_review",
            MaterialInquiryStatus::Quoted => "quoted",
            MaterialInquiryStatus::Negotiating => "negotiating",
            MaterialInquiryStatus::Accepted => "accepted",
            MaterialInquiryStatus::Rejected => "rejected",
            MaterialInquiryStatus::Completed => "completed",
            MaterialInquiryStatus::Cancelled => "cancelled",
        }
    }

    pub fn all() -> Vec<MaterialInquiryStatus> {
        vec![
            MaterialInquiryStatus::New,
            MaterialInquiryStatus::UnderReview,
            MaterialInquiryStatus::Quoted,
            MaterialInquiryStatus::Negotiating,
            MaterialInquiryStatus::Accepted,
            MaterialInquiryStatus::Rejected,
            MaterialInquiryStatus::Completed,
            MaterialInquiryStatus::Cancelled,
        ]
    }

    /// `"all"` and unknown codes disable the filter.
    pub fn from_filter(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub material_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub specification: Option<String>,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub target_price: Option<f64>,
    #[serde(default)]
    pub required_by_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierQuote {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub supplier_id: String,
    pub supplier_name: String,
    pub quoted_price: f64,
    #[serde(default)]
    pub quoted_date: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: QuoteStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialInquiry {
    #[serde(rename = "_id")]
    pub id: String,
    pub inquiry_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub delivery_location: String,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub total_estimated_value: Option<f64>,
    #[serde(default)]
    pub payment_terms: Option<String>,
    #[serde(default)]
    pub additional_requirements: Option<String>,
    #[serde(default)]
    pub status: MaterialInquiryStatus,
    #[serde(default)]
    pub priority: InquiryPriority,
    #[serde(default)]
    pub supplier_quotes: Vec<SupplierQuote>,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub internal_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialInquiryStats {
    pub total: u64,
    pub new: u64,
    pub under_review: u64,
    pub quoted: u64,
    pub negotiating: u64,
    pub accepted: u64,
    pub completed: u64,
    pub urgent: u64,
    pub high: u64,
}

/// `GET /material-inquiries/admin/all`: items and counters side by side,
/// so this body is read without envelope unwrapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialInquiryListResponse {
    #[serde(default)]
    pub data: Vec<MaterialInquiry>,
    #[serde(default)]
    pub stats: MaterialInquiryStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterialInquiryStatusRequest {
    pub status: MaterialInquiryStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddQuoteRequest {
    pub supplier_id: String,
    pub supplier_name: String,
    pub quoted_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// Client-side filtering
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialInquiryFilter {
    pub search: String,
    pub status: Option<MaterialInquiryStatus>,
    pub priority: Option<InquiryPriority>,
}

impl MaterialInquiryFilter {
    pub fn matches(&self, inquiry: &MaterialInquiry) -> bool {
        let search = self.search.trim();
        if !search.is_empty() {
            let needle = search.to_lowercase();
            let hit = contains_ignore_case(&inquiry.inquiry_number, &needle)
                || contains_ignore_case(&inquiry.customer_name, &needle)
                || contains_ignore_case(&inquiry.email, &needle)
                || inquiry.phone.contains(search);
            if !hit {
                return false;
            }
        }
        if let Some(status) = self.status {
            if inquiry.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if inquiry.priority != priority {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, items: &'a [MaterialInquiry]) -> Vec<&'a MaterialInquiry> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}
