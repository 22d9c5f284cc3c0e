//! Tool registry with time-dependent visibility.
//!
//! A [`ToolRegistry`] is built once at startup. Two read-only services sit on top of it and
//! share the same [`VisibilityPolicy`] and [`Clock`]:
//!
//! - [`ListingService`] answers "which tools exist right now";
//! - [`Dispatcher`] executes a tool after re-checking that it is visible at call time.
//!
//! [`ToolSurface`] wires both from one set of parts so they cannot disagree.

mod args;
pub mod builtin;
mod clock;
mod dispatch;
mod error;
mod listing;
pub mod math;
mod policy;
mod registry;
mod tool;

pub use args::{input_schema, validate, ArgValue, JsonObject, ParamKind, ParamSpec, ToolArgs};
pub use clock::{clock_from_override, Clock, FixedHourClock, Moment, SystemClock};
pub use dispatch::Dispatcher;
pub use error::{ArgumentError, MathError, RegistryError, Result, ToolError, ToolFailure};
pub use hourgate_protocol::ErrorKind;
pub use listing::ListingService;
pub use policy::{HourWindow, HourWindowPolicy, VisibilityPolicy};
pub use registry::ToolRegistry;
pub use tool::{ToolBody, ToolDefinition};

use std::sync::Arc;

/// Listing and dispatch built over one registry, policy and clock.
#[derive(Clone)]
pub struct ToolSurface {
    registry: Arc<ToolRegistry>,
    listing: ListingService,
    dispatcher: Dispatcher,
}

impl ToolSurface {
    pub fn new(
        registry: ToolRegistry,
        policy: Arc<dyn VisibilityPolicy>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let registry = Arc::new(registry);
        Self {
            listing: ListingService::new(registry.clone(), policy.clone(), clock.clone()),
            dispatcher: Dispatcher::new(registry.clone(), policy, clock),
            registry,
        }
    }

    /// The shipped bodma/codma/prodma surface.
    pub fn builtin(clock: Arc<dyn Clock>) -> std::result::Result<Self, RegistryError> {
        Ok(Self::new(
            builtin::builtin_registry()?,
            Arc::new(builtin::builtin_policy()),
            clock,
        ))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn listing(&self) -> &ListingService {
        &self.listing
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
