use crate::clock::{Clock, Moment};
use crate::policy::VisibilityPolicy;
use crate::registry::ToolRegistry;
use crate::tool::ToolDefinition;
use std::sync::Arc;

/// Answers "which tools exist right now": registry enumeration filtered by the policy.
#[derive(Clone)]
pub struct ListingService {
    registry: Arc<ToolRegistry>,
    policy: Arc<dyn VisibilityPolicy>,
    clock: Arc<dyn Clock>,
}

impl ListingService {
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

    /// Visible tools at `at`, in registration order.
    pub fn list_at(&self, at: Moment) -> Vec<Arc<ToolDefinition>> {
        self.registry
            .iter()
            .filter(|tool| self.policy.is_visible(tool.name(), at))
            .cloned()
            .collect()
    }

    /// Sample the clock once and list against that moment.
    pub fn list(&self) -> (Moment, Vec<Arc<ToolDefinition>>) {
        let at = self.clock.now();
        let tools = self.list_at(at);
        log::debug!(
            "tools/list at {at}: {} of {} tools visible",
            tools.len(),
            self.registry.len()
        );
        (at, tools)
    }
}
