//! Errors returned by the REST client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// An admin endpoint was called without a bearer token.
    #[error("Login required")]
    Unauthenticated,

    /// The configured base URL cannot be used.
    #[error("Invalid API base URL '{url}'")]
    InvalidBaseUrl { url: String },

    /// Building the HTTP client failed.
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Request to '{path}' failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success HTTP status.
    #[error("Server returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The envelope came back with `success: false`.
    #[error("Request rejected: {message}")]
    Rejected { message: String },

    /// The envelope reported success but carried no `data`.
    #[error("Response from '{path}' had no data")]
    MissingData { path: String },

    /// The body was not the JSON we expected.
    #[error("Failed to decode response from '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Short category name, handy for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated => "unauthenticated",
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Client { .. } => "client",
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Rejected { .. } => "rejected",
            ApiError::MissingData { .. } => "missing_data",
            ApiError::Decode { .. } => "decode",
        }
    }

    /// True when the backend could not be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }

    /// Message the server itself supplied, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message }
                if !message.is_empty() =>
            {
                Some(message.as_str())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_required_message() {
        assert_eq!(ApiError::Unauthenticated.to_string(), "Login required");
        assert_eq!(ApiError::Unauthenticated.kind(), "unauthenticated");
    }

    #[test]
    fn server_message_only_when_present() {
        let err = ApiError::Rejected {
            message: "Email is invalid".into(),
        };
        assert_eq!(err.server_message(), Some("Email is invalid"));

        let err = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.server_message(), None);
        assert!(!err.is_connectivity());
    }
}
