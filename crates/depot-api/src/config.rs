//! Gateway configuration and bearer-token resolution.

use std::time::Duration;

use depot_core::{DepotError, Result};
use url::Url;

/// Environment variable consulted when no explicit token is configured.
pub const TOKEN_ENV_VAR: &str = "DEPOT_TOKEN";

/// Default remote endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.depot.dev";

/// Configuration for the HTTP gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Explicit bearer token. When unset, the `DEPOT_TOKEN` environment
    /// variable is consulted instead.
    pub token: Option<String>,

    /// Base URL of the remote service (default: `https://api.depot.dev`).
    pub base_url: String,

    /// HTTP request timeout (default: 30 seconds).
    pub request_timeout: Duration,

    /// User agent sent with every call.
    pub user_agent: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            user_agent: concat!("depot-reconcile/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl GatewayConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bearer token explicitly.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the base URL of the remote service.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the HTTP request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the user agent sent with every call.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resolves the bearer token: the explicit configuration value wins,
    /// then the `DEPOT_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::Configuration` when neither source yields a
    /// non-empty token. This is checked before any resource operation is
    /// attempted.
    pub fn resolve_token(&self) -> Result<String> {
        if let Some(token) = &self.token {
            if !token.is_empty() {
                return Ok(token.clone());
            }
        }
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                return Ok(token);
            }
        }
        Err(DepotError::configuration(format!(
            "Required token could not be found. Set the token in the gateway \
             configuration or via the `{TOKEN_ENV_VAR}` environment variable."
        )))
    }

    /// Validates the configured base URL and returns it with any trailing
    /// slash removed.
    ///
    /// # Errors
    ///
    /// Returns `DepotError::Configuration` for an unparseable URL.
    pub fn validated_base_url(&self) -> Result<String> {
        Url::parse(&self.base_url).map_err(|err| {
            DepotError::configuration(format!("invalid base URL {:?}: {err}", self.base_url))
        })?;
        Ok(self.base_url.trim_end_matches('/').to_string())
    }
}
