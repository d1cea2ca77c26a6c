//! Development server parameters.
//!
//! The plan only describes the server; the engine runs it.

use serde::Serialize;
use std::collections::BTreeMap;
use std::net::{AddrParseError, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3355;
pub const INDEX_DOCUMENT: &str = "/index.html";

/// Headers required for cross-origin isolation (`SharedArrayBuffer`, WASM threads).
pub const CROSS_ORIGIN_HEADERS: &[(&str, &str)] = &[
    ("Cross-Origin-Embedder-Policy", "require-corp"),
    ("Cross-Origin-Opener-Policy", "same-origin"),
];

/// SPA routing: unmatched client-side routes are answered with one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryApiFallback {
    pub index: String,
}

impl HistoryApiFallback {
    /// Document to serve for `request_path`, or `None` when the path looks
    /// like a file (its last segment has an extension).
    #[must_use]
    pub fn rewrite(&self, request_path: &str) -> Option<&str> {
        let path = request_path.split(['?', '#']).next().unwrap_or_default();
        let last = path.rsplit('/').next().unwrap_or_default();

        if last.contains('.') {
            None
        } else {
            Some(&self.index)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    pub host: String,
    pub port: u16,
    pub compress: bool,
    pub hot: bool,
    pub history_api_fallback: HistoryApiFallback,
    pub headers: BTreeMap<String, String>,
}

impl DevServerConfig {
    /// Bind address for the server.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            compress: true,
            hot: true,
            history_api_fallback: HistoryApiFallback {
                index: INDEX_DOCUMENT.to_string(),
            },
            headers: CROSS_ORIGIN_HEADERS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let server = DevServerConfig::default();
        assert_eq!(server.port, 3355);
        assert!(server.compress);
        assert!(server.hot);
        assert_eq!(server.header("Cross-Origin-Embedder-Policy"), Some("require-corp"));
        assert_eq!(server.header("Cross-Origin-Opener-Policy"), Some("same-origin"));
    }

    #[test]
    fn test_socket_addr_binds_all_interfaces() {
        let addr = DevServerConfig::default().socket_addr().unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 3355);
    }

    #[test]
    fn test_fallback_for_client_routes() {
        let fallback = DevServerConfig::default().history_api_fallback;
        assert_eq!(fallback.rewrite("/"), Some("/index.html"));
        assert_eq!(fallback.rewrite("/scenes/cube"), Some("/index.html"));
        assert_eq!(fallback.rewrite("/scenes/cube?debug=1"), Some("/index.html"));
    }

    #[test]
    fn test_no_fallback_for_files() {
        let fallback = DevServerConfig::default().history_api_fallback;
        assert_eq!(fallback.rewrite("/js/main.1a2b3c4d.js"), None);
        assert_eq!(fallback.rewrite("/assets/skybox.hdr?v=2"), None);
    }

    #[test]
    fn test_json_keys() {
        let value = serde_json::to_value(DevServerConfig::default()).unwrap();
        assert_eq!(value["historyApiFallback"]["index"], "/index.html");
        assert_eq!(value["host"], "0.0.0.0");
    }
}
