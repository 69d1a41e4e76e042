//! HTTP transport: JSON-RPC 2.0 over POST.
//!
//! Lets plain HTTP clients (curl, browsers) query the album list without an
//! MCP session library. Also serves `GET /health` and `GET /`.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::server::INSTRUCTIONS;

/// MCP protocol revision answered when the client does not ask for one.
const PROTOCOL_VERSION: &str = "2024-11-05";

const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

impl JsonRpcResponse {
    /// Wrap a handler outcome in a response for `id`.
    fn reply(id: Option<Value>, outcome: Result<Value, JsonRpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(result) => (Some(result), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

/// `tools/call` and `prompts/get` parameters.
#[derive(Debug, Deserialize)]
struct NamedCall {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

/// `resources/read` parameters.
#[derive(Debug, Deserialize)]
struct ReadParams {
    uri: String,
}

/// `initialize` parameters; everything else the client sends is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitializeParams {
    #[serde(default)]
    protocol_version: Option<String>,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: McpServer,
    rpc_path: String,
    session: Arc<RwLock<Option<Session>>>,
}

/// What the last `initialize` negotiated.
#[derive(Debug, Clone)]
struct Session {
    protocol_version: String,
    initialized: bool,
}

impl AppState {
    fn new(server: McpServer, rpc_path: String) -> Self {
        Self {
            server,
            rpc_path,
            session: Arc::new(RwLock::new(None)),
        }
    }
}

impl HttpTransport {
    /// Create a transport for the given listener settings.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Serve HTTP until the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let state = AppState::new(server, self.config.rpc_path.clone());

        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state);

        if self.config.enable_cors {
            app = app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            cors = self.config.enable_cors,
            "Listening on {} (POST {} for JSON-RPC, GET /health)", addr, self.config.rpc_path
        );

        axum::serve(listener, app)
            .await
            .map_err(TransportError::http)
    }
}

/// Server identity and endpoints.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        }
    }))
}

/// Liveness plus the number of albums being served.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "albums": state.server.store().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> Json<JsonRpcResponse> {
    Json(process_request(&state, request).await)
}

/// Answer one JSON-RPC request.
#[instrument(skip_all, fields(method = %request.method))]
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    let outcome = if request.jsonrpc != "2.0" {
        Err(JsonRpcError::new(INVALID_REQUEST, "Invalid Request"))
    } else {
        dispatch(state, &request).await
    };
    JsonRpcResponse::reply(request.id, outcome)
}

/// Route a request to its handler by method name.
async fn dispatch(state: &AppState, request: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
    let server = &state.server;
    debug!("Dispatching {}", request.method);

    match request.method.as_str() {
        "initialize" => initialize(state, params_or_default(request)?).await,
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => Ok(server.tool_list()),
        "tools/call" => {
            let call: NamedCall = params(request)?;
            let arguments = call.arguments.unwrap_or(Value::Null);
            server
                .call_tool(&call.name, arguments)
                .map_err(JsonRpcError::invalid_params)
        }
        "resources/list" => Ok(server.resource_list().await),
        "resources/templates/list" => Ok(serde_json::json!({ "resourceTemplates": [] })),
        "resources/read" => {
            let read: ReadParams = params(request)?;
            server
                .resource_contents(&read.uri)
                .await
                .map_err(JsonRpcError::invalid_params)
        }
        "prompts/list" => Ok(server.prompt_list().await),
        "prompts/get" => {
            let call: NamedCall = params(request)?;
            server
                .rendered_prompt(&call.name, call.arguments)
                .await
                .map_err(JsonRpcError::invalid_params)
        }
        method if method.starts_with("notifications/") => {
            notification(state, method).await;
            Ok(Value::Null)
        }
        method => {
            warn!("Unknown method: {}", method);
            Err(JsonRpcError::new(METHOD_NOT_FOUND, "Method not found"))
        }
    }
}

/// Decode required request parameters.
fn params<T: DeserializeOwned>(request: &JsonRpcRequest) -> Result<T, JsonRpcError> {
    let raw = request
        .params
        .clone()
        .ok_or_else(|| JsonRpcError::invalid_params("Missing params"))?;
    serde_json::from_value(raw).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
}

/// Decode optional request parameters.
fn params_or_default<T: DeserializeOwned + Default>(
    request: &JsonRpcRequest,
) -> Result<T, JsonRpcError> {
    match request.params {
        None | Some(Value::Null) => Ok(T::default()),
        Some(_) => params(request),
    }
}

async fn initialize(state: &AppState, params: InitializeParams) -> Result<Value, JsonRpcError> {
    let protocol_version = params
        .protocol_version
        .unwrap_or_else(|| PROTOCOL_VERSION.to_string());
    info!("Initializing HTTP session (protocol {})", protocol_version);

    *state.session.write().await = Some(Session {
        protocol_version: protocol_version.clone(),
        initialized: false,
    });

    Ok(serde_json::json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "tools": {},
            "resources": {},
            "prompts": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": INSTRUCTIONS
    }))
}

async fn notification(state: &AppState, method: &str) {
    if method == "notifications/initialized" {
        if let Some(session) = state.session.write().await.as_mut() {
            session.initialized = true;
            debug!("Session ready (protocol {})", session.protocol_version);
        }
    } else {
        debug!("Ignoring notification: {}", method);
    }
}
