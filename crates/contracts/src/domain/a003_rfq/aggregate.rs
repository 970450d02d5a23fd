use serde::{Deserialize, Serialize};

/// Запрос котировки (RFQ).
///
/// The backend schema for RFQs is loose, so only the identifier is typed
/// and everything else is kept as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rfq {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl Rfq {
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_str())
    }
}

/// Тело ответа `GET /admin/rfqs`: список лежит в `data` или в `rfqs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RfqListResponse {
    #[serde(default)]
    pub data: Option<Vec<Rfq>>,
    #[serde(default)]
    pub rfqs: Option<Vec<Rfq>>,
}

impl RfqListResponse {
    pub fn into_items(self) -> Vec<Rfq> {
        self.data.or(self.rfqs).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_items_prefer_data_over_rfqs() {
        let body: RfqListResponse = serde_json::from_value(json!({
            "success": true,
            "data": [{ "_id": "r1", "material": "steel" }],
            "rfqs": [{ "_id": "r2" }]
        }))
        .unwrap();
        let items = body.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "r1");
        assert_eq!(items[0].field_str("material"), Some("steel"));
    }

    #[test]
    fn test_items_fall_back_to_rfqs() {
        let body: RfqListResponse =
            serde_json::from_value(json!({ "rfqs": [{ "id": "r2" }] })).unwrap();
        assert_eq!(body.into_items()[0].id, "r2");

        let empty: RfqListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_items().is_empty());
    }
}
