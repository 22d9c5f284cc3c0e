use crate::hints;
use hourgate_core::{JsonObject, ToolError, ToolSurface};
use hourgate_protocol::{ErrorEnvelope, ToolOutput};
use rmcp::model::{CallToolResult, Content};
use serde_json::json;

/// Number as text (`72.0`, `1.3333333333333333`) plus `{ "result": ... }` as structured content.
pub(crate) fn tool_success(value: f64) -> CallToolResult {
    let mut result = CallToolResult::success(vec![Content::text(format!("{value:?}"))]);
    result.structured_content = serde_json::to_value(ToolOutput { result: value }).ok();
    result
}

pub(crate) fn tool_error_envelope(error: ErrorEnvelope) -> CallToolResult {
    let mut text = format!("error: {}\n{}", error.code, error.message);
    if let Some(hint) = error.hint.as_deref().filter(|hint| !hint.trim().is_empty()) {
        text.push_str("\nhint: ");
        text.push_str(hint);
    }

    let mut result = CallToolResult::error(vec![Content::text(text)]);
    result.structured_content = Some(json!({ "error": error }));
    result
}

/// Envelope for a failed dispatch, with details and hints where the failure kind has them.
pub(crate) fn tool_failure(
    surface: &ToolSurface,
    name: &str,
    args: Option<&JsonObject>,
    error: &ToolError,
) -> CallToolResult {
    let envelope = ErrorEnvelope::new(error.kind(), error.to_string());
    let envelope = match error {
        ToolError::UnknownTool(_) => envelope
            .with_details(json!({ "tool": name }))
            .with_hint("Call tools/list to see the tools available right now."),
        ToolError::ToolUnavailable {
            hour, availability, ..
        } => envelope
            .with_details(json!({
                "tool": name,
                "hour": hour,
                "available": availability,
            }))
            .with_hint(
                "The tool list depends on the time of day; call tools/list again before retrying.",
            ),
        ToolError::InvalidArguments { source, .. } => {
            let schema = surface
                .registry()
                .lookup(name)
                .ok()
                .map(|tool| tool.input_schema());
            let mut envelope = envelope;
            if let Some(schema) = schema.as_ref() {
                envelope = envelope.with_details(json!({
                    "tool": name,
                    "required": hints::required_fields(schema),
                }));
                if let Some(hint) = hints::build_schema_hint(schema, args, source) {
                    envelope = envelope.with_hint(hint);
                }
            }
            envelope
        }
        ToolError::Math(_) => envelope.with_details(json!({ "tool": name })),
    };
    tool_error_envelope(envelope)
}
