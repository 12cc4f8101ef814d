//! Environment-backed configuration for the connectivity layer.

use crate::error::ConnectError;
use std::env;

/// Default backend address for local development.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:50051";

/// Connection settings for the backend gRPC services.
#[derive(Debug, Clone)]
pub struct ConnectConfig {
    /// Backend address, including the scheme.
    pub server_url: String,
    /// Static service credential stamped onto every call.
    pub proxy_api_key: String,
    /// Use TLS with native roots instead of plaintext.
    pub use_tls: bool,
}

impl ConnectConfig {
    /// Builds a config with explicit values and plaintext transport.
    pub fn new(server_url: impl Into<String>, proxy_api_key: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            proxy_api_key: proxy_api_key.into(),
            use_tls: false,
        }
    }

    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    /// Reads the configuration from the environment.
    ///
    /// `GRPC_SERVER_URL` defaults to [`DEFAULT_SERVER_URL`]; `PROXY_API_KEY`
    /// is required. TLS is enabled when `APP_ENV` is `production`.
    pub fn from_env() -> Result<Self, ConnectError> {
        let server_url =
            env::var("GRPC_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let proxy_api_key =
            env::var("PROXY_API_KEY").map_err(|_| ConnectError::MissingEnv("PROXY_API_KEY"))?;

        let use_tls = env::var("APP_ENV")
            .map(|value| value == "production")
            .unwrap_or(false);

        Ok(Self {
            server_url,
            proxy_api_key,
            use_tls,
        })
    }
}
