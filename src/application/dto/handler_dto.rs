//! Handler DTOs.

use serde::{Deserialize, Serialize};

/// Structured result handed back to the invoking scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    /// Outcome indicator.
    pub message: String,
}

impl HandlerResponse {
    /// The response for a completed run.
    #[must_use]
    pub fn success() -> Self {
        Self {
            message: "success".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serializes_as_message() {
        let json = serde_json::to_string(&HandlerResponse::success()).unwrap();
        assert_eq!(json, r#"{"message":"success"}"#);
    }
}
