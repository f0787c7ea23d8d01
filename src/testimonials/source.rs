use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::api::ApiClient;
use crate::testimonials::types::TestimonialsData;

#[derive(Debug, Error)]
pub enum TestimonialsError {
    #[error("Failed to read preview file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preview file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the testimonials page gets its content from.
#[derive(Debug, Clone)]
pub enum TestimonialsSource {
    Remote(ApiClient),
    Preview(TestimonialsData),
}

impl TestimonialsSource {
    /// Loads the page content. A failed fetch leaves the page empty.
    pub async fn load(&self) -> TestimonialsData {
        match self {
            TestimonialsSource::Preview(data) => data.clone(),
            TestimonialsSource::Remote(client) => {
                client.fetch_testimonials().await.unwrap_or_else(|err| {
                    warn!(error = %err, kind = err.kind(), "Error fetching testimonials");
                    TestimonialsData::default()
                })
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PreviewFile {
    Envelope { data: TestimonialsData },
    Bare(TestimonialsData),
}

/// Reads a preview payload: the page object itself or an API envelope.
pub fn load_preview_file(path: &Path) -> Result<TestimonialsData, TestimonialsError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| TestimonialsError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
    let parsed: PreviewFile =
        serde_json::from_str(&content).map_err(|source| TestimonialsError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(match parsed {
        PreviewFile::Envelope { data } | PreviewFile::Bare(data) => data,
    })
}
