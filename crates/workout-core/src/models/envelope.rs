// ABOUTME: Uniform JSON response envelope for every API endpoint
// ABOUTME: Wraps a success flag with either a payload or an error message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

use serde::{Deserialize, Serialize};

/// Response wrapper: `{ "success": bool, "data"?: T, "error"?: string }`
///
/// Absent fields are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Payload on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed response carrying an error message
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_omits_data() {
        let json = serde_json::to_string(&ApiResponse::<()>::failure("No workout found"))
            .unwrap_or_default();
        assert_eq!(json, r#"{"success":false,"error":"No workout found"}"#);
    }

    #[test]
    fn test_success_omits_error() {
        let json = serde_json::to_string(&ApiResponse::success(Vec::<u8>::new())).unwrap_or_default();
        assert_eq!(json, r#"{"success":true,"data":[]}"#);
    }
}
