use crate::args::{ParamSpec, ToolArgs};
use crate::error::{MathError, RegistryError, ToolFailure};
use crate::math;
use crate::policy::{HourWindow, HourWindowPolicy};
use crate::registry::ToolRegistry;
use crate::tool::ToolDefinition;

pub const BODMA: &str = "bodma";
pub const CODMA: &str = "codma";
pub const PRODMA: &str = "prodma";

pub const PRODMA_START_HOUR: u32 = 10;
pub const PRODMA_END_HOUR: u32 = 22;

pub const PRODMA_WINDOW: HourWindow = HourWindow {
    start: PRODMA_START_HOUR,
    end: PRODMA_END_HOUR,
};

/// bodma, codma, prodma, in that order.
pub fn builtin_registry() -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();
    registry.register(binary_tool(
        BODMA,
        "BODMA: (a^b) / (a*b). Example: bodma(2,3) = 8/6 ≈ 1.333",
        math::bodma,
    ))?;
    registry.register(binary_tool(
        CODMA,
        "CODMA: (a*b) / (a^b), the inverse of BODMA. Example: codma(2,3) = 6/8 = 0.75",
        math::codma,
    ))?;
    registry.register(binary_tool(
        PRODMA,
        format!(
            "PRODMA: (a^b) * (b^a). Example: prodma(2,3) = 8*9 = 72. Available {} only.",
            PRODMA_WINDOW
        ),
        math::prodma,
    ))?;
    Ok(registry)
}

/// prodma is gated to `[10:00, 22:00)`; everything else is always visible.
pub fn builtin_policy() -> HourWindowPolicy {
    HourWindowPolicy::new().with_window(PRODMA, PRODMA_WINDOW)
}

fn binary_tool(
    name: &str,
    description: impl Into<String>,
    op: fn(f64, f64) -> Result<f64, MathError>,
) -> ToolDefinition {
    ToolDefinition::new(
        name,
        description,
        vec![ParamSpec::number("a"), ParamSpec::number("b")],
        move |args: &ToolArgs| -> Result<f64, ToolFailure> {
            let a = args.number("a")?;
            let b = args.number("b")?;
            Ok(op(a, b)?)
        },
    )
}
