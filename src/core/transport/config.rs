//! Transport selection and bind settings.

use serde::{Deserialize, Serialize};
#[cfg(any(feature = "tcp", feature = "http"))]
use tracing::warn;

#[cfg(any(feature = "tcp", feature = "http"))]
const DEFAULT_HOST: &str = "127.0.0.1";

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(feature = "http")]
const DEFAULT_RPC_PATH: &str = "/mcp";

/// Which transport serves the MCP session(s), chosen by `MCP_TRANSPORT`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// One session over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// One session per accepted TCP connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP listener settings.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port to listen on.
    pub port: u16,

    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
}

/// HTTP listener settings.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port to listen on.
    pub port: u16,

    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path of the JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Answer CORS preflights for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    DEFAULT_RPC_PATH.to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

/// Read a string variable, falling back to `default` when unset.
#[cfg(any(feature = "tcp", feature = "http"))]
fn env_string(name: &str, default: impl FnOnce() -> String) -> String {
    std::env::var(name).unwrap_or_else(|_| default())
}

/// Read a port variable; unset or unparseable values fall back to `default`.
#[cfg(any(feature = "tcp", feature = "http"))]
fn env_port(name: &str, default: u16) -> u16 {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    /// Settings from `MCP_TCP_HOST` / `MCP_TCP_PORT`.
    pub fn from_env() -> Self {
        Self {
            port: env_port("MCP_TCP_PORT", DEFAULT_TCP_PORT),
            host: env_string("MCP_TCP_HOST", default_host),
        }
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Settings from `MCP_HTTP_HOST`, `MCP_HTTP_PORT`, `MCP_HTTP_PATH` and `MCP_HTTP_CORS`.
    pub fn from_env() -> Self {
        Self {
            port: env_port("MCP_HTTP_PORT", DEFAULT_HTTP_PORT),
            host: env_string("MCP_HTTP_HOST", default_host),
            rpc_path: env_string("MCP_HTTP_PATH", default_rpc_path),
            enable_cors: std::env::var("MCP_HTTP_CORS")
                .map(|v| !matches!(v.to_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or_else(|_| default_cors()),
        }
    }

    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl Default for TransportConfig {
    /// The first compiled-in transport of stdio, tcp, http.
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

impl TransportConfig {
    /// TCP transport on `host:port`.
    #[cfg(feature = "tcp")]
    pub fn tcp(port: u16, host: impl Into<String>) -> Self {
        Self::Tcp(TcpConfig {
            port,
            host: host.into(),
        })
    }

    /// HTTP transport on `host:port` with the default path and CORS.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Select the transport named by `MCP_TRANSPORT`.
    ///
    /// Unset, unknown or not compiled-in names select the default transport.
    pub fn from_env() -> Self {
        let name = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match name.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig::from_env()),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            _ => Self::default(),
        }
    }

    /// Human-readable summary for startup logs.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}", cfg.address()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}{}", cfg.address(), cfg.rpc_path),
        }
    }

    /// Whether this is the STDIO transport.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        let config = TransportConfig::default();
        assert!(config.is_stdio());
        assert_eq!(config.description(), "STDIO (standard MCP mode)");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_description() {
        let config = TransportConfig::tcp(3000, "127.0.0.1");
        assert!(!config.is_stdio());
        assert_eq!(config.description(), "TCP on 127.0.0.1:3000");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_defaults() {
        let config = TransportConfig::http(8080, "0.0.0.0");
        match config {
            TransportConfig::Http(ref http) => {
                assert_eq!(http.rpc_path, "/mcp");
                assert!(http.enable_cors);
            }
            #[allow(unreachable_patterns)]
            _ => panic!("expected HTTP config"),
        }
        assert_eq!(config.description(), "HTTP on 0.0.0.0:8080/mcp");
    }
}
