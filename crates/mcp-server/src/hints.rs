//! Schema-derived hints for `invalid_arguments` errors.

use hourgate_core::{ArgumentError, JsonObject};
use serde_json::{Map, Value};

/// "missing required field `b`. Required: a, b. Example: {"a":2,"b":0}"
pub(crate) fn build_schema_hint(
    schema: &JsonObject,
    args: Option<&JsonObject>,
    error: &ArgumentError,
) -> Option<String> {
    let required: Vec<String> = schema
        .get("required")
        .and_then(Value::as_array)?
        .iter()
        .filter_map(Value::as_str)
        .map(ToString::to_string)
        .collect();
    if required.is_empty() {
        return None;
    }

    let mut out = String::new();
    match error {
        ArgumentError::Missing(field) => {
            out.push_str(&format!("missing required field `{field}`. "));
        }
        ArgumentError::WrongType { name, expected, .. } => {
            out.push_str(&format!("field `{name}` must be a JSON {expected}. "));
        }
    }
    out.push_str(&format!("Required: {}.", required.join(", ")));
    if let Some(example) = build_required_example(schema, args, &required) {
        out.push_str(&format!(" Example: {example}"));
    }
    Some(out)
}

pub(crate) fn required_fields(schema: &JsonObject) -> Vec<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn build_required_example(
    schema: &JsonObject,
    args: Option<&JsonObject>,
    required: &[String],
) -> Option<String> {
    let props = schema.get("properties").and_then(Value::as_object);
    let mut out = Map::new();
    for field in required {
        let prop_schema = props.and_then(|m| m.get(field));
        let value = placeholder_value(field, prop_schema, args);
        out.insert(field.clone(), value);
    }
    serde_json::to_string(&Value::Object(out)).ok()
}

fn placeholder_value(field: &str, schema: Option<&Value>, args: Option<&JsonObject>) -> Value {
    let ty = schema
        .and_then(|schema| schema.get("type"))
        .and_then(Value::as_str);

    // Keep what the caller already got right.
    if let Some(supplied) = args.and_then(|a| a.get(field)) {
        let fits = match ty {
            Some("number") => supplied.is_number(),
            Some("string") => supplied.is_string(),
            _ => false,
        };
        if fits {
            return supplied.clone();
        }
    }

    match ty {
        Some("number") => Value::Number(0.into()),
        Some("string") => Value::String("...".to_string()),
        _ => Value::String("...".to_string()),
    }
}
