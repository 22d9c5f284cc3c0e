use crate::args::JsonObject;
use crate::clock::{Clock, Moment};
use crate::error::{Result, ToolError};
use crate::policy::VisibilityPolicy;
use crate::registry::ToolRegistry;
use std::sync::Arc;

/// Executes a named tool after re-checking its visibility.
///
/// The check never trusts an earlier listing: each call samples its own moment, so a caller
/// holding a stale list is still rejected once the tool's window has closed.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    policy: Arc<dyn VisibilityPolicy>,
    clock: Arc<dyn Clock>,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<ToolRegistry>,
        policy: Arc<dyn VisibilityPolicy>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            policy,
            clock,
        }
    }

    pub fn invoke(&self, name: &str, arguments: Option<&JsonObject>) -> Result<f64> {
        self.invoke_at(name, arguments, self.clock.now())
    }

    /// Checks run in a fixed order: existence, visibility, arguments, then the body.
    pub fn invoke_at(&self, name: &str, arguments: Option<&JsonObject>, at: Moment) -> Result<f64> {
        let tool = self.registry.lookup(name).inspect_err(|_| {
            log::debug!("tools/call for unknown tool '{name}'");
        })?;

        if !self.policy.is_visible(name, at) {
            log::info!("Rejected call to gated tool '{name}' at {at}");
            return Err(ToolError::ToolUnavailable {
                name: name.to_string(),
                hour: at.hour(),
                availability: self.policy.availability(name),
            });
        }

        let args = tool
            .validate(arguments)
            .map_err(|source| ToolError::InvalidArguments {
                tool: name.to_string(),
                source,
            })
            .inspect_err(|err| log::debug!("{err}"))?;

        tool.execute(&args)
            .map_err(|failure| ToolError::from_failure(name, failure))
    }
}
