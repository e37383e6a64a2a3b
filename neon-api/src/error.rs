//! Transport error classification

use thiserror::Error;

/// Errors from one control-plane exchange.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connection refused, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response; carries the status code and raw body text.
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Malformed request or response JSON. Indicates a contract
    /// mismatch with the remote API.
    #[error("invalid JSON payload: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ApiError {
    /// The remote reported the record absent. Drives the idempotent
    /// Read/Delete handling in the mappers.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// The remote rejected a create because the record already exists.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Status { status: 409, .. })
    }
}

/// Result type for control-plane calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_matches_404_only() {
        let missing = ApiError::Status {
            status: 404,
            body: "branch not found".into(),
        };
        let denied = ApiError::Status {
            status: 403,
            body: "forbidden".into(),
        };
        assert!(missing.is_not_found());
        assert!(!denied.is_not_found());
        assert!(!missing.is_conflict());
    }

    #[test]
    fn test_conflict_matches_409() {
        let conflict = ApiError::Status {
            status: 409,
            body: "branch already exists".into(),
        };
        assert!(conflict.is_conflict());
    }

    #[test]
    fn test_status_display_keeps_raw_body() {
        let error = ApiError::Status {
            status: 422,
            body: r#"{"message":"invalid region"}"#.into(),
        };
        assert_eq!(
            error.to_string(),
            r#"API request failed with status 422: {"message":"invalid region"}"#
        );
    }
}
