//! Shared error response structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Field-level validation errors, keyed by request field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, String>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            errors: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach a field error to the response
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .get_or_insert_with(HashMap::new)
            .insert(field.into(), message.into());
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_are_omitted_when_empty() {
        let body = serde_json::to_value(ErrorResponse::new(error_codes::NOT_FOUND, "user not found")).unwrap();
        assert_eq!(body["error"], "NOT_FOUND");
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn test_with_field_error() {
        let response = ErrorResponse::new(error_codes::INVALID_INPUT, "invalid input")
            .with_field_error("phone_number", "phone number is not valid");
        let body = serde_json::to_value(response).unwrap();
        assert_eq!(body["errors"]["phone_number"], "phone number is not valid");
    }
}
