use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Expected JSON but got content type {content_type:?}: {preview}")]
    UnexpectedContentType {
        content_type: Option<String>,
        preview: String,
    },

    #[error("Expected a JSON array but got {0}")]
    NotAnArray(&'static str),

    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Length of the body preview logged for a wrong content type
const CONTENT_PREVIEW_LENGTH: usize = 200;

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str, max_len: usize) -> String {
        if body.len() <= max_len {
            body.to_string()
        } else {
            let mut end = max_len;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body, MAX_ERROR_BODY_LENGTH);
        match status.as_u16() {
            401 | 403 => ApiError::AccessDenied(truncated),
            404 => ApiError::NotFound(truncated),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(truncated),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }

    pub fn unexpected_content_type(content_type: Option<String>, body: &str) -> Self {
        ApiError::UnexpectedContentType {
            content_type,
            preview: Self::truncate_body(body, CONTENT_PREVIEW_LENGTH),
        }
    }

    /// True when the endpoint answered but the payload had the wrong shape,
    /// as opposed to the request itself failing.
    pub fn is_shape_failure(&self) -> bool {
        matches!(
            self,
            ApiError::UnexpectedContentType { .. }
                | ApiError::NotAnArray(_)
                | ApiError::MalformedBody(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            ApiError::ServerError(ref b) if b == "boom"
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, ""),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, ""),
            ApiError::AccessDenied(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            ApiError::RateLimited
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::IM_A_TEAPOT, ""),
            ApiError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_truncate_body() {
        let long = "x".repeat(MAX_ERROR_BODY_LENGTH + 10);
        let truncated = ApiError::truncate_body(&long, MAX_ERROR_BODY_LENGTH);
        assert!(truncated.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(truncated.contains("510 total bytes"));

        // Never split a multi-byte character
        let emoji = "📦".repeat(3);
        let truncated = ApiError::truncate_body(&emoji, 5);
        assert!(truncated.starts_with("📦"));
    }

    #[test]
    fn test_shape_failures() {
        assert!(ApiError::NotAnArray("an object").is_shape_failure());
        assert!(ApiError::unexpected_content_type(Some("text/html".into()), "<html>").is_shape_failure());
        assert!(!ApiError::ServerError("boom".into()).is_shape_failure());
        assert!(!ApiError::RateLimited.is_shape_failure());
    }
}
