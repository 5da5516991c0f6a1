//! Firestore error types.

use thiserror::Error;

/// Result type for Firestore operations.
pub type FirestoreResult<T> = Result<T, FirestoreError>;

/// Errors that can occur during Firestore operations.
#[derive(Debug, Error)]
pub enum FirestoreError {
    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Document already exists: {0}")]
    AlreadyExists(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Rate limited, retry after {0}ms")]
    RateLimited(u64),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FirestoreError {
    pub fn auth_error(msg: impl Into<String>) -> Self {
        Self::AuthError(msg.into())
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Map an HTTP status from the Firestore REST API to an error.
    pub fn from_http_status(status: u16, msg: String) -> Self {
        match status {
            401 => Self::AuthError(msg),
            403 => Self::PermissionDenied(msg),
            404 => Self::NotFound(msg),
            409 => Self::AlreadyExists(msg),
            412 => Self::PreconditionFailed(msg),
            429 => Self::RateLimited(1000),
            500..=599 => Self::Unavailable(msg),
            _ => Self::RequestFailed(msg),
        }
    }

    /// Check if error is retryable (transient transport conditions only).
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FirestoreError::Network(_)
                | FirestoreError::RateLimited(_)
                | FirestoreError::Unavailable(_)
        )
    }

    /// True when the store should be reported as temporarily unavailable
    /// rather than as an internal failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            FirestoreError::Network(_)
                | FirestoreError::RateLimited(_)
                | FirestoreError::Unavailable(_)
        )
    }

    /// Delay hint for rate-limited responses.
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            FirestoreError::RateLimited(ms) => Some(*ms),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert!(matches!(
            FirestoreError::from_http_status(404, String::new()),
            FirestoreError::NotFound(_)
        ));
        assert!(matches!(
            FirestoreError::from_http_status(412, String::new()),
            FirestoreError::PreconditionFailed(_)
        ));
        assert!(matches!(
            FirestoreError::from_http_status(503, String::new()),
            FirestoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_unavailable_classification() {
        assert!(FirestoreError::Unavailable(String::new()).is_unavailable());
        assert!(FirestoreError::RateLimited(100).is_unavailable());
        assert!(!FirestoreError::NotFound(String::new()).is_unavailable());
        assert!(!FirestoreError::InvalidResponse(String::new()).is_unavailable());
    }

    #[test]
    fn test_retry_after_hint() {
        assert_eq!(FirestoreError::RateLimited(250).retry_after_ms(), Some(250));
        assert_eq!(FirestoreError::NotFound(String::new()).retry_after_ms(), None);
    }
}
