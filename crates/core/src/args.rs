//! Declared tool parameters, their JSON Schema rendering, and argument validation.

use crate::error::ArgumentError;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt;

pub type JsonObject = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Number,
    String,
}

impl ParamKind {
    pub const fn json_type(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_type())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub kind: ParamKind,
    pub required: bool,
    pub description: Option<String>,
}

impl ParamSpec {
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::Number)
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ParamKind::String)
    }

    fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            description: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// JSON Schema object (`type: object`) for a declared parameter list.
pub fn input_schema(params: &[ParamSpec]) -> JsonObject {
    let mut properties = Map::new();
    for param in params {
        let mut prop = Map::new();
        prop.insert("type".to_string(), json!(param.kind.json_type()));
        if let Some(description) = param.description.as_deref() {
            prop.insert("description".to_string(), json!(description));
        }
        properties.insert(param.name.clone(), Value::Object(prop));
    }

    let required: Vec<Value> = params
        .iter()
        .filter(|param| param.required)
        .map(|param| json!(param.name))
        .collect();

    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert("required".to_string(), Value::Array(required));
    schema
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Number(f64),
    Text(String),
}

/// Arguments that passed validation against a tool's declared parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArgs {
    values: Vec<(String, ArgValue)>,
}

impl ToolArgs {
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn number(&self, name: &str) -> Result<f64, ArgumentError> {
        match self.get(name) {
            Some(ArgValue::Number(value)) => Ok(*value),
            Some(ArgValue::Text(_)) => Err(ArgumentError::WrongType {
                name: name.to_string(),
                expected: ParamKind::Number,
                found: "string",
            }),
            None => Err(ArgumentError::Missing(name.to_string())),
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ArgValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Check `args` against `params`, in declaration order.
///
/// `null` counts as absent. Keys with no declared parameter are ignored.
pub fn validate(params: &[ParamSpec], args: Option<&JsonObject>) -> Result<ToolArgs, ArgumentError> {
    let mut values = Vec::with_capacity(params.len());
    for param in params {
        let raw = args
            .and_then(|args| args.get(&param.name))
            .filter(|value| !value.is_null());
        let Some(raw) = raw else {
            if param.required {
                return Err(ArgumentError::Missing(param.name.clone()));
            }
            continue;
        };

        let value = match param.kind {
            ParamKind::Number => raw.as_f64().map(ArgValue::Number),
            ParamKind::String => raw.as_str().map(|s| ArgValue::Text(s.to_string())),
        };
        let Some(value) = value else {
            return Err(ArgumentError::WrongType {
                name: param.name.clone(),
                expected: param.kind,
                found: json_type_name(raw),
            });
        };
        values.push((param.name.clone(), value));
    }
    Ok(ToolArgs { values })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
