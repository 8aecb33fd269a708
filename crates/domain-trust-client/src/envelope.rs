//! Structured failure bodies returned by the service.

use serde::{Deserialize, Serialize};

/// Error envelope sent with 4xx/5xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorEnvelope {
    /// Status code as reported in the body.
    pub status: i64,
    /// Summary line.
    pub detail: String,
    /// Individual failure messages.
    pub errors: Vec<ErrorMessage>,
}

/// One entry of [`ErrorEnvelope::errors`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessage {
    /// Human-readable message.
    pub message: String,
}

impl ErrorEnvelope {
    /// Render as `"<detail> (HTTP <status>)"`, followed by `": m1; m2"` when
    /// messages are present.
    #[must_use]
    pub fn render(&self) -> String {
        let mut rendered = format!("{} (HTTP {})", self.detail, self.status);
        if !self.errors.is_empty() {
            rendered.push_str(": ");
            let messages: Vec<&str> = self
                .errors
                .iter()
                .map(|entry| entry.message.as_str())
                .collect();
            rendered.push_str(&messages.join("; "));
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_detail_and_status_only() {
        let envelope = ErrorEnvelope {
            status: 404,
            detail: "Not Found".into(),
            errors: Vec::new(),
        };
        assert_eq!(envelope.render(), "Not Found (HTTP 404)");
    }

    #[test]
    fn renders_messages_joined() {
        let envelope: ErrorEnvelope = serde_json::from_str(
            r#"{"status":422,"detail":"Unprocessable Entity","errors":[{"message":"a"},{"message":"b"}]}"#,
        )
        .expect("decode");
        assert_eq!(envelope.render(), "Unprocessable Entity (HTTP 422): a; b");
    }
}
