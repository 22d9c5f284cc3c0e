use crate::error::{RegistryError, ToolError};
use crate::tool::ToolDefinition;
use std::collections::HashMap;
use std::sync::Arc;

/// Name-keyed tool table, built once at startup and read-only afterwards.
///
/// Iteration follows registration order.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<ToolDefinition>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: ToolDefinition) -> Result<(), RegistryError> {
        if self.contains(definition.name()) {
            return Err(RegistryError::DuplicateName(definition.name().to_string()));
        }
        self.index
            .insert(definition.name().to_string(), self.tools.len());
        self.tools.push(Arc::new(definition));
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<&Arc<ToolDefinition>, ToolError> {
        self.index
            .get(name)
            .map(|&idx| &self.tools[idx])
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Every registered name, regardless of visibility.
    pub fn all_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tools.iter().map(|tool| tool.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ToolDefinition>> + '_ {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
