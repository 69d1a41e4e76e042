//! The rmcp server handler for the album list.
//!
//! `McpServer` owns the loaded [`AlbumStore`] and the three domain front
//! ends built over it: the tool router, the resource service and the prompt
//! service. STDIO and TCP sessions go through the `ServerHandler` impl;
//! the HTTP transport uses the JSON views in the second `impl` block, which
//! serialize the same rmcp models.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::config::Config;
use crate::domains::{
    catalog::{AlbumStore, JsonFileSource},
    prompts::{PromptError, PromptService},
    resources::ResourceService,
    tools::build_tool_router,
};

/// Instructions returned to clients during initialization.
pub const INSTRUCTIONS: &str = "Provides access to Pitchfork's \"200 Best Albums of the 2000s\" \
ranked list. Search, filter, and explore albums by artist, title, year (2000-2009), rank \
position, or genre. All albums include rank, artist, title, release year, and genre tags.";

/// MCP handler over one album collection. Cheap to clone.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    store: AlbumStore,
    resources: Arc<ResourceService>,
    prompts: Arc<PromptService>,
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Build the handler over an already loaded album store.
    pub fn new(config: Config, store: AlbumStore) -> Self {
        Self {
            tool_router: build_tool_router::<Self>(store.clone()),
            resources: Arc::new(ResourceService::new(store.clone())),
            prompts: Arc::new(PromptService::new(store.clone())),
            config: Arc::new(config),
            store,
        }
    }

    /// Load the album list named by `config.catalog`, then build the handler.
    pub async fn from_config(config: Config) -> super::Result<Self> {
        let source = JsonFileSource::new(config.catalog.albums_path.clone());
        let store = AlbumStore::load(&source, &config.catalog.albums_key).await?;
        info!(albums = store.len(), "Album list loaded");
        Ok(Self::new(config, store))
    }

    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The album collection every request is answered from.
    pub fn store(&self) -> &AlbumStore {
        &self.store
    }
}

/// JSON views for the HTTP transport. Errors come back as display strings.
impl McpServer {
    /// `{"tools": [...]}` with each tool's input schema.
    pub fn tool_list(&self) -> Value {
        serde_json::json!({ "tools": self.tool_router.list_all() })
    }

    /// Run a tool through the name-based registry.
    #[cfg(feature = "http")]
    pub fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, String> {
        crate::domains::tools::ToolRegistry::new(self.store.clone()).call_tool(name, arguments)
    }

    /// `{"resources": [...]}`
    pub async fn resource_list(&self) -> Value {
        serde_json::json!({ "resources": self.resources.list_resources().await })
    }

    /// `{"contents": [...]}` for `uri`.
    pub async fn resource_contents(&self, uri: &str) -> Result<Value, String> {
        self.resources
            .read_resource(uri)
            .await
            .map(|result| serde_json::json!(result))
            .map_err(|e| e.to_string())
    }

    /// `{"prompts": [...]}`
    pub async fn prompt_list(&self) -> Value {
        serde_json::json!({ "prompts": self.prompts.list_prompts().await })
    }

    /// `{"description": ..., "messages": [...]}` for a rendered prompt.
    pub async fn rendered_prompt(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> Result<Value, String> {
        let arguments = match arguments {
            Some(Value::Object(map)) => Some(string_arguments(map)),
            _ => None,
        };
        self.prompts
            .get_prompt(name, arguments)
            .await
            .map(|result| serde_json::json!(result))
            .map_err(|e| e.to_string())
    }
}

/// Keep the string-valued prompt arguments; prompts take no other types.
fn string_arguments(map: JsonObject) -> HashMap<String, String> {
    map.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, text)),
            _ => None,
        })
        .collect()
}

/// Map a prompt failure to the protocol error the client sees.
fn prompt_error(error: PromptError) -> McpError {
    match error {
        PromptError::TemplateError(_) => McpError::internal_error(error.to_string(), None),
        _ => McpError::invalid_params(error.to_string(), None),
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip_all)]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: self.resources.list_resources().await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(uri = %request.uri))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        debug!("Reading resource");
        self.resources
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip_all)]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: self.prompts.list_prompts().await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip_all, fields(prompt = %request.name))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("Rendering prompt");
        let arguments = request.arguments.map(string_arguments);
        self.prompts
            .get_prompt(&request.name, arguments)
            .await
            .map_err(prompt_error)
    }
}
