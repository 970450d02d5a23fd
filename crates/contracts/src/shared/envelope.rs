use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Обёртка ответа backend: `{ "success": bool, "data": T }`.
///
/// Not every endpoint uses it. Single-entity endpoints sometimes return
/// the entity directly, so callers decide on the raw JSON value whether
/// an envelope is present.
pub fn is_envelope(body: &Value) -> bool {
    body.as_object()
        .map(|obj| obj.contains_key("data"))
        .unwrap_or(false)
}

/// `Some(message)` when the body explicitly reports `success: false`.
pub fn rejection(body: &Value) -> Option<String> {
    let obj = body.as_object()?;
    match obj.get("success") {
        Some(Value::Bool(false)) => Some(
            obj.get("message")
                .and_then(|m| m.as_str())
                .filter(|m| !m.trim().is_empty())
                .unwrap_or("Request was rejected by the server")
                .to_string(),
        ),
        _ => None,
    }
}

/// Ответ без полезной нагрузки (`{ "success": true, "message": "..." }`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_envelope() {
        assert!(is_envelope(&json!({"success": true, "data": []})));
        assert!(is_envelope(&json!({"data": null})));
        assert!(!is_envelope(&json!({"id": "1"})));
        assert!(!is_envelope(&json!([1, 2])));
    }

    #[test]
    fn test_rejection_message() {
        assert_eq!(
            rejection(&json!({"success": false, "message": "Supplier not found"})),
            Some("Supplier not found".to_string())
        );
        assert_eq!(
            rejection(&json!({"success": false})),
            Some("Request was rejected by the server".to_string())
        );
        assert_eq!(rejection(&json!({"success": true})), None);
        assert_eq!(rejection(&json!({"id": "1"})), None);
    }
}
