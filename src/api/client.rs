//! HTTP transport for the storefront REST API.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::api::envelope::Envelope;
use crate::api::error::ApiError;
use crate::config::{ApiConfig, Config};

/// Whether an endpoint needs the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Admin,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(api: &ApiConfig, token: Option<String>) -> Result<Self, ApiError> {
        let base_url = api.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl { url: base_url });
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(u64::from(api.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .build()
            .map_err(|source| ApiError::Client { source })?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Builds a client from the full config, resolving the token.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api, config.auth.resolve_token())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Fails fast with [`ApiError::Unauthenticated`] when no token is set.
    pub fn require_auth(&self) -> Result<(), ApiError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(ApiError::Unauthenticated)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        access: Access,
    ) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(method, self.url(path));
        match access {
            Access::Public => Ok(builder),
            Access::Admin => {
                let token = self.token.as_deref().ok_or(ApiError::Unauthenticated)?;
                Ok(builder.bearer_auth(token))
            }
        }
    }

    /// Sends a request without a body and returns its decoded envelope.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        access: Access,
    ) -> Result<Envelope<T>, ApiError> {
        let builder = self.request(method, path, access)?;
        self.execute(builder, path).await
    }

    /// Sends a JSON body and returns the decoded envelope.
    pub(crate) async fn call_with_body<B, T>(
        &self,
        method: Method,
        path: &str,
        access: Access,
        body: &B,
    ) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path, access)?.json(body);
        self.execute(builder, path).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        path: &str,
    ) -> Result<Envelope<T>, ApiError> {
        let response = builder.send().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Transport {
            path: path.to_string(),
            source,
        })?;
        debug!(path, status = status.as_u16(), bytes = body.len(), "api response");

        if !status.is_success() {
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());
            warn!(path, status = status.as_u16(), %message, "api request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Pulls `message` (or `error`) out of an error body, if it is JSON.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn trims_trailing_slash() {
        let client = ApiClient::new(&api("http://localhost:5000/api/"), None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/contact"), "http://localhost:5000/api/contact");
    }

    #[test]
    fn rejects_bad_scheme() {
        let err = ApiClient::new(&api("localhost:5000"), None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn admin_request_without_token_fails_locally() {
        let client = ApiClient::new(&api("http://localhost:5000"), None).unwrap();
        assert!(!client.is_authenticated());
        assert!(matches!(
            client.request(Method::PUT, "/contact", Access::Admin),
            Err(ApiError::Unauthenticated)
        ));
        assert!(client.request(Method::GET, "/contact", Access::Public).is_ok());
    }

    #[test]
    fn extracts_error_message() {
        assert_eq!(
            error_message(r#"{"success":false,"message":"Bad input"}"#),
            Some("Bad input".to_string())
        );
        assert_eq!(error_message(r#"{"error":"boom"}"#), Some("boom".to_string()));
        assert_eq!(error_message("<html>"), None);
    }
}
