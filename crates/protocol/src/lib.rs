use anyhow::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error kinds a caller can receive from `tools/call`.
///
/// The wire form is the snake_case code (`unknown_tool`, `tool_unavailable`, ...).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownTool,
    ToolUnavailable,
    InvalidArguments,
    MathDomain,
    DivisionByZero,
}

impl ErrorKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnknownTool => "unknown_tool",
            Self::ToolUnavailable => "tool_unavailable",
            Self::InvalidArguments => "invalid_arguments",
            Self::MathDomain => "math_domain",
            Self::DivisionByZero => "division_by_zero",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct ErrorEnvelope {
    pub code: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(code: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            hint: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Structured payload of a successful tool call.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, JsonSchema)]
pub struct ToolOutput {
    /// Floating-point result of the operation.
    pub result: f64,
}

/// JSON Schema object describing [`ToolOutput`], suitable for a tool's `outputSchema`.
pub fn tool_output_schema() -> Result<serde_json::Map<String, serde_json::Value>> {
    let schema = schemars::schema_for!(ToolOutput);
    match serde_json::to_value(schema)? {
        serde_json::Value::Object(map) => Ok(map),
        other => anyhow::bail!("output schema is not an object: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn error_kinds_serialize_as_snake_case_codes() {
        for kind in [
            ErrorKind::UnknownTool,
            ErrorKind::ToolUnavailable,
            ErrorKind::InvalidArguments,
            ErrorKind::MathDomain,
            ErrorKind::DivisionByZero,
        ] {
            let value = serde_json::to_value(kind).unwrap();
            assert_eq!(value, json!(kind.code()));
        }
    }

    #[test]
    fn envelope_omits_empty_optionals() {
        let envelope = ErrorEnvelope::new(ErrorKind::UnknownTool, "unknown tool 'nope'");
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({ "code": "unknown_tool", "message": "unknown tool 'nope'" })
        );
    }

    #[test]
    fn output_schema_declares_numeric_result() {
        let schema = tool_output_schema().unwrap();
        assert_eq!(schema.get("type"), Some(&json!("object")));
        let result = schema
            .get("properties")
            .and_then(|props| props.get("result"))
            .expect("result property");
        assert_eq!(result.get("type"), Some(&json!("number")));
    }
}
