use crate::{catalog, render};
use hourgate_core::{JsonObject, ToolDefinition, ToolSurface};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam,
    ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};
use std::sync::Arc;

/// MCP face of a [`ToolSurface`].
///
/// `tools/list` and `tools/call` each sample the clock on their own; nothing is remembered
/// between requests, so one instance can be cloned into every connection.
#[derive(Clone)]
pub struct HourgateService {
    surface: ToolSurface,
    output_schema: Option<Arc<JsonObject>>,
}

impl HourgateService {
    pub fn new(surface: ToolSurface) -> Self {
        let output_schema = match hourgate_protocol::tool_output_schema() {
            Ok(schema) => Some(Arc::new(schema)),
            Err(err) => {
                log::warn!("Failed to build tool output schema: {err:#}");
                None
            }
        };
        Self {
            surface,
            output_schema,
        }
    }

    pub fn list_visible_tools(&self) -> Vec<Tool> {
        let (_, tools) = self.surface.listing().list();
        tools.iter().map(|tool| self.mcp_tool(tool)).collect()
    }

    fn mcp_tool(&self, definition: &ToolDefinition) -> Tool {
        let mut tool = Tool::new(
            definition.name().to_string(),
            definition.description().to_string(),
            Arc::new(definition.input_schema()),
        );
        tool.output_schema = self.output_schema.clone();
        tool
    }

    pub fn call(&self, request: &CallToolRequestParam) -> CallToolResult {
        let name = request.name.as_ref();
        let args = request.arguments.as_ref();
        match self.surface.dispatcher().invoke(name, args) {
            Ok(value) => render::tool_success(value),
            Err(err) => render::tool_failure(&self.surface, name, args, &err),
        }
    }
}

impl ServerHandler for HourgateService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: catalog::SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move { Ok(ListToolsResult::with_all_items(self.list_visible_tools())) }
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { Ok(self.call(&request)) }
    }
}
