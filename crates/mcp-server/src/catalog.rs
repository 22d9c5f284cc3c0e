use hourgate_core::builtin::{BODMA, CODMA, PRODMA, PRODMA_WINDOW};

/// Name reported in `serverInfo` during `initialize`.
pub(crate) const SERVER_NAME: &str = "BODMA-CODMA-PRODMA";

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: BODMA,
        summary: "(a^b) / (a*b).",
    },
    ToolDescriptor {
        name: CODMA,
        summary: "(a*b) / (a^b), the inverse of bodma.",
    },
    ToolDescriptor {
        name: PRODMA,
        summary: "(a^b) * (b^a); time-gated.",
    },
];

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Hourgate computes two-operand formulas over numbers `a` and `b`.".to_string(),
        format!(
            "The tool list changes with the server's local time: {PRODMA} is listed and callable only {PRODMA_WINDOW}."
        ),
        "Calls are re-checked when they arrive; re-list tools after a tool_unavailable error."
            .to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_mention_every_tool_and_the_window() {
        let text = tool_instructions();
        for tool in TOOL_CATALOG {
            assert!(text.contains(&format!("- {}:", tool.name)), "{text}");
        }
        assert!(text.contains("10:00-22:00"), "{text}");
    }
}
