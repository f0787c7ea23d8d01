use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Remote REST API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Credentials for admin endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    /// Bearer token. `STOREFRONT_TOKEN` takes precedence when set.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Whether the showcase starts auto-advancing.
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Milliseconds between automatic advances (default: 3500).
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Substitute the built-in categories when the API fails.
    #[serde(default = "default_true")]
    pub fallback_on_error: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub theme: Theme,
}

/// Environment variable that overrides `auth.token`.
pub const TOKEN_ENV_VAR: &str = "STOREFRONT_TOKEN";

fn default_base_url() -> String {
    "https://wow-lifebackend.onrender.com/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_autoplay_interval_ms() -> u64 {
    3500
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: default_autoplay_interval_ms(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fallback_on_error: true,
        }
    }
}

impl AuthConfig {
    /// Token from the environment, falling back to the config file.
    pub fn resolve_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .or_else(|| self.token.clone())
            .filter(|token| !token.trim().is_empty())
    }
}
