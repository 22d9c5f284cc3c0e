use crate::args::{self, JsonObject, ParamSpec, ToolArgs};
use crate::error::{ArgumentError, ToolFailure};
use std::fmt;
use std::sync::Arc;

pub type ToolBody = Arc<dyn Fn(&ToolArgs) -> Result<f64, ToolFailure> + Send + Sync>;

/// A named operation with declared parameters and an executable body.
///
/// Definitions carry no visibility state; whether a tool may be listed or called is decided
/// by a [`crate::VisibilityPolicy`] at request time.
#[derive(Clone)]
pub struct ToolDefinition {
    name: String,
    description: String,
    params: Vec<ParamSpec>,
    body: ToolBody,
}

impl ToolDefinition {
    pub fn new<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        params: Vec<ParamSpec>,
        body: F,
    ) -> Self
    where
        F: Fn(&ToolArgs) -> Result<f64, ToolFailure> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            params,
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    pub fn input_schema(&self) -> JsonObject {
        args::input_schema(&self.params)
    }

    pub fn validate(&self, raw: Option<&JsonObject>) -> Result<ToolArgs, ArgumentError> {
        args::validate(&self.params, raw)
    }

    /// Run the body. Callers are expected to have validated `args` and checked visibility.
    pub fn execute(&self, args: &ToolArgs) -> Result<f64, ToolFailure> {
        (self.body)(args)
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
