use serde::{Deserialize, Serialize};

/// Приоритет заявки (общий для material и product inquiries)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl InquiryPriority {
    pub fn code(&self) -> &'static str {
        match self {
            InquiryPriority::Low => "low",
            InquiryPriority::Medium => "medium",
            InquiryPriority::High => "high",
            InquiryPriority::Urgent => "urgent",
        }
    }

    /// Parse a filter value; `"all"` and unknown codes disable the filter.
    pub fn from_filter(code: &str) -> Option<Self> {
        match code {
            "low" => Some(InquiryPriority::Low),
            "medium" => Some(InquiryPriority::Medium),
            "high" => Some(InquiryPriority::High),
            "urgent" => Some(InquiryPriority::Urgent),
            _ => None,
        }
    }
}

/// Case-insensitive containment used by the inquiry search boxes.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
