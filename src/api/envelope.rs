//! The `{ success, data, message }` wrapper every endpoint responds with.

use serde::{Deserialize, Deserializer};

use crate::api::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Checks the success flag, ignoring the payload.
    pub fn ensure_success(&self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                message: self.message.clone().unwrap_or_default(),
            })
        }
    }

    /// Unwraps `data` from a successful envelope.
    pub fn into_data(self, path: &str) -> Result<T, ApiError> {
        self.ensure_success()?;
        self.data.ok_or_else(|| ApiError::MissingData {
            path: path.to_string(),
        })
    }
}

/// Field decoder that reads `null` as the type's default.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_data() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2]}"#).unwrap();
        assert_eq!(env.into_data("/x").unwrap(), vec![1, 2]);
    }

    #[test]
    fn failure_carries_message() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        match env.into_data("/x") {
            Err(ApiError::Rejected { message }) => assert_eq!(message, "nope"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn success_without_data() {
        let env: Envelope<String> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(env.ensure_success().is_ok());
        assert!(matches!(
            env.into_data("/contact"),
            Err(ApiError::MissingData { .. })
        ));
    }

    #[test]
    fn null_data_is_none() {
        let env: Envelope<String> =
            serde_json::from_str(r#"{"success":true,"data":null}"#).unwrap();
        assert!(env.data.is_none());
    }
}
