use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Статус заявки поставщика на онбординг
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SupplierStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SupplierStatus::Pending => "pending",
            SupplierStatus::Approved => "approved",
            SupplierStatus::Rejected => "rejected",
        }
    }

    pub fn all() -> Vec<SupplierStatus> {
        vec![
            SupplierStatus::Pending,
            SupplierStatus::Approved,
            SupplierStatus::Rejected,
        ]
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub country: String,
}

/// Загруженный документ; `file_url` хранится в том виде, в котором его
/// сохранил backend, и перед показом проходит через resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDocument {
    pub file_url: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDocuments {
    #[serde(default)]
    pub pan: Option<SupplierDocument>,
    #[serde(default)]
    pub gst: Option<SupplierDocument>,
    #[serde(default)]
    pub cin: Option<SupplierDocument>,
    #[serde(default)]
    pub bank_proof: Option<SupplierDocument>,
    #[serde(default)]
    pub business_license: Option<SupplierDocument>,
    #[serde(default)]
    pub aadhaar: Option<SupplierDocument>,
}

impl SupplierDocuments {
    /// Uploaded documents in display order, labelled.
    pub fn uploaded(&self) -> Vec<(&'static str, &SupplierDocument)> {
        [
            ("PAN Card", &self.pan),
            ("GST Certificate", &self.gst),
            ("CIN Certificate", &self.cin),
            ("Bank Proof", &self.bank_proof),
            ("Business License", &self.business_license),
            ("Aadhaar Card", &self.aadhaar),
        ]
        .into_iter()
        .filter_map(|(label, doc)| doc.as_ref().map(|d| (label, d)))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(rename = "_id")]
    pub id: String,
    pub company_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub address: SupplierAddress,
    #[serde(default)]
    pub documents: SupplierDocuments,
    #[serde(default)]
    pub business_description: String,
    #[serde(default)]
    pub products_offered: Vec<String>,
    #[serde(default)]
    pub years_in_business: u32,
    #[serde(default)]
    pub status: SupplierStatus,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}
