//! The tool handler contract.
//!
//! A handler takes the raw context string the host sends and always returns
//! a string: plain text, a JSON success payload, or a JSON error object.
//! Nothing is propagated to the caller as an error.

use super::descriptor::ToolDescriptor;

/// Trait implemented by every tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Static metadata for this tool.
    fn descriptor(&self) -> ToolDescriptor;

    /// Name of this tool.
    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Run the tool against a raw `{"arguments": {...}}` context.
    async fn handle(&self, context: &str) -> String;
}

/// Render `{"error": <message>}`, with a space after the colon.
pub fn error_payload(message: impl AsRef<str>) -> String {
    let message = serde_json::Value::from(message.as_ref());
    format!("{{\"error\": {}}}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_is_json() {
        let payload = error_payload("quote \"x\" failed");
        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed["error"], "quote \"x\" failed");
        assert_eq!(parsed.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_error_payload_separator() {
        assert_eq!(
            error_payload("Missing required argument: state"),
            r#"{"error": "Missing required argument: state"}"#
        );
        assert_eq!(error_payload("a\nb"), r#"{"error": "a\nb"}"#);
    }
}
