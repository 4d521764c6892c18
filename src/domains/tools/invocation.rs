//! Per-call argument parsing.
//!
//! Every tool receives the raw context the host sends, shaped as
//! `{"arguments": {<field>: <value>, ...}}`. [`ToolInvocation`] turns it into
//! a flat name -> string map and is dropped once the call returns.

use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use super::error::ToolError;

/// The stringified arguments of one tool call.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    arguments: HashMap<String, String>,
}

impl ToolInvocation {
    /// Parse a raw context string for the given tool.
    ///
    /// The context must be a JSON object. `arguments` may be missing or
    /// `null`; otherwise it must be an object too. Scalars are converted to
    /// their JSON text so `{"latitude": 40.7}` and `{"latitude": "40.7"}`
    /// read the same; `null` values count as absent.
    pub fn parse(tool: &'static str, context: &str) -> Result<Self, ToolError> {
        let raw: Value = serde_json::from_str(context)
            .map_err(|e| ToolError::invalid_context(e.to_string()))?;

        let Value::Object(mut raw) = raw else {
            return Err(ToolError::invalid_context(format!(
                "expected a JSON object, got {}",
                kind_of(&raw)
            )));
        };

        let arguments = match raw.remove("arguments") {
            None | Some(Value::Null) => HashMap::new(),
            Some(Value::Object(map)) => map
                .into_iter()
                .filter_map(|(name, value)| stringify(value).map(|v| (name, v)))
                .collect(),
            Some(other) => {
                return Err(ToolError::invalid_context(format!(
                    "\"arguments\" must be an object, got {}",
                    kind_of(&other)
                )));
            }
        };

        debug!("{} invoked with {} argument(s)", tool, arguments.len());
        Ok(Self { arguments })
    }

    /// Look up an argument.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    /// Look up an argument that must be present.
    pub fn require(&self, name: &str) -> Result<&str, ToolError> {
        self.get(name)
            .ok_or_else(|| ToolError::missing_argument(name))
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.arguments.len()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn stringify(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Build the raw context a handler expects from an MCP `arguments` value.
pub fn invocation_context(arguments: Value) -> String {
    serde_json::json!({ "arguments": arguments }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_arguments() {
        let inv = ToolInvocation::parse("t", r#"{"arguments": {"state": "NJ"}}"#).unwrap();
        assert_eq!(inv.get("state"), Some("NJ"));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn test_parse_numbers_become_text() {
        let inv = ToolInvocation::parse(
            "t",
            r#"{"arguments": {"latitude": 40.7, "longitude": -74, "flag": true}}"#,
        )
        .unwrap();
        assert_eq!(inv.get("latitude"), Some("40.7"));
        assert_eq!(inv.get("longitude"), Some("-74"));
        assert_eq!(inv.get("flag"), Some("true"));
    }

    #[test]
    fn test_parse_missing_or_null_arguments() {
        assert_eq!(ToolInvocation::parse("t", "{}").unwrap().len(), 0);
        assert_eq!(
            ToolInvocation::parse("t", r#"{"arguments": null}"#).unwrap().len(),
            0
        );

        let inv = ToolInvocation::parse("t", r#"{"arguments": {"ticker": null}}"#).unwrap();
        assert_eq!(inv.get("ticker"), None);
    }

    #[test]
    fn test_parse_malformed_context() {
        let err = ToolInvocation::parse("t", "{not json").unwrap_err();
        assert!(matches!(err, ToolError::InvalidContext(_)));
        assert!(err.to_string().starts_with("Invalid JSON context provided: "));

        assert!(ToolInvocation::parse("t", r#"{"arguments": 5}"#).is_err());
        assert!(ToolInvocation::parse("t", "[]").is_err());
    }

    #[test]
    fn test_parse_rejects_non_object_context() {
        for context in [r#"[{"ticker": "aapl"}]"#, r#""aapl""#, "42", "null"] {
            let err = ToolInvocation::parse("t", context).unwrap_err();
            assert!(matches!(err, ToolError::InvalidContext(_)), "{context}");
        }

        let err = ToolInvocation::parse("t", r#"{"arguments": ["aapl"]}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid JSON context provided: \"arguments\" must be an object, got an array"
        );
    }

    #[test]
    fn test_require_reports_argument_name() {
        let inv = ToolInvocation::parse("t", r#"{"arguments": {}}"#).unwrap();
        let err = inv.require("state").unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: state");
    }

    #[test]
    fn test_invocation_context_roundtrips() {
        let context = invocation_context(serde_json::json!({ "ticker": "msft" }));
        let inv = ToolInvocation::parse("t", &context).unwrap();
        assert_eq!(inv.get("ticker"), Some("msft"));
    }
}
