use super::transport::TransportError;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401: the session is missing, invalid or expired.
    #[error("Unauthorized: session expired")]
    Unauthorized,

    /// Any other non-2xx status.
    #[error("Server returned {status}: {status_text}")]
    Http { status: u16, status_text: String },

    /// The request never completed (DNS, connection refused, aborted).
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx body that is not JSON or does not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("Failed to serialize request: {0}")]
    Encode(String),

    /// A 2xx envelope reporting `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Input refused before any request was sent.
    #[error("{0}")]
    Invalid(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Status classification: `None` for 2xx.
    pub fn from_status(status: u16, status_text: &str) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(ApiError::Unauthorized),
            _ => Some(ApiError::Http {
                status,
                status_text: status_text.to_string(),
            }),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for a dismissable notification
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Session expired. Please log in again.".to_string(),
            ApiError::Http { status, status_text } if status_text.trim().is_empty() => {
                format!("Server returned {}", status)
            }
            ApiError::Http { status, status_text } => {
                format!("Server returned {}: {}", status, status_text)
            }
            ApiError::Network(_) => "Backend server is not reachable".to_string(),
            ApiError::Decode(_) | ApiError::Encode(_) => {
                "Unexpected data exchanged with the server".to_string()
            }
            ApiError::Rejected(message) | ApiError::Invalid(message) => message.clone(),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Network(err.0)
    }
}
