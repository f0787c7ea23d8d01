use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::api::{ApiClient, ApiError};
use crate::catalog::category::{default_categories, CategoryItem};

#[derive(Debug, Error)]
pub enum CatalogError {
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

    #[error("Failed to load categories: {source}")]
    Api {
        #[source]
        source: ApiError,
    },

    #[error("The server returned no categories")]
    Empty,
}

/// Where the carousel gets its categories from.
#[derive(Debug, Clone)]
pub enum CategorySource {
    Remote(ApiClient),
    /// Fixed payload handed in by the caller.
    Preview(Vec<CategoryItem>),
}

/// How a [`CategoryLoad`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Remote,
    Preview,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLoad {
    pub items: Vec<CategoryItem>,
    pub origin: LoadOrigin,
}

impl CategoryLoad {
    fn fallback() -> Self {
        Self {
            items: default_categories(),
            origin: LoadOrigin::Fallback,
        }
    }
}

impl CategorySource {
    /// Loads the items to show.
    ///
    /// A failed, rejected or empty remote fetch yields the built-in
    /// categories when `fallback_on_error` is set, and an error otherwise.
    pub async fn load(&self, fallback_on_error: bool) -> Result<CategoryLoad, CatalogError> {
        let client = match self {
            CategorySource::Preview(items) => {
                return Ok(CategoryLoad {
                    items: items.clone(),
                    origin: LoadOrigin::Preview,
                })
            }
            CategorySource::Remote(client) => client,
        };

        let failure = match client.fetch_categories().await {
            Ok(items) if !items.is_empty() => {
                return Ok(CategoryLoad {
                    items,
                    origin: LoadOrigin::Remote,
                })
            }
            Ok(_) => CatalogError::Empty,
            Err(source) => CatalogError::Api { source },
        };

        if fallback_on_error {
            match &failure {
                CatalogError::Empty => warn!("no categories from server, using defaults"),
                other => error!(error = %other, "Error fetching categories, using defaults"),
            }
            Ok(CategoryLoad::fallback())
        } else {
            Err(failure)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PreviewFile {
    List(Vec<CategoryItem>),
    Wrapped { items: Vec<CategoryItem> },
    Envelope { data: Vec<CategoryItem> },
}

/// Reads a preview payload: a bare JSON array, `{ "items": [...] }`, or an
/// API envelope with the array in `data`.
pub fn load_preview_file(path: &Path) -> Result<Vec<CategoryItem>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: PreviewFile =
        serde_json::from_str(&content).map_err(|source| CatalogError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(match parsed {
        PreviewFile::List(items)
        | PreviewFile::Wrapped { items }
        | PreviewFile::Envelope { data: items } => items,
    })
}

/// Navigation target emitted by the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CategoryDetail { id: String },
    AllCategories,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::CategoryDetail { id } => format!("/category/{id}"),
            Route::AllCategories => "/category".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn route_paths() {
        let route = Route::CategoryDetail {
            id: "vehicles".into(),
        };
        assert_eq!(route.path(), "/category/vehicles");
        assert_eq!(Route::AllCategories.path(), "/category");
    }

    #[tokio::test]
    async fn preview_skips_network() {
        let items = default_categories()[..1].to_vec();
        let load = CategorySource::Preview(items.clone()).load(false).await.unwrap();
        assert_eq!(load.origin, LoadOrigin::Preview);
        assert_eq!(load.items, items);
    }

    #[tokio::test]
    async fn empty_preview_is_not_replaced() {
        let load = CategorySource::Preview(Vec::new()).load(true).await.unwrap();
        assert!(load.items.is_empty());
    }

    #[test]
    fn preview_file_shapes() {
        for body in [
            r#"[{"id":"a"},{"id":"b"}]"#,
            r#"{"items":[{"id":"a"},{"id":"b"}]}"#,
            r#"{"success":true,"data":[{"id":"a"},{"id":"b"}]}"#,
        ] {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(body.as_bytes()).unwrap();
            let items = load_preview_file(file.path()).unwrap();
            assert_eq!(items.len(), 2, "{body}");
        }
    }

    #[test]
    fn preview_file_errors() {
        let missing = load_preview_file(Path::new("/nonexistent/preview.json"));
        assert!(matches!(missing, Err(CatalogError::ReadError { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(
            load_preview_file(file.path()),
            Err(CatalogError::ParseError { .. })
        ));
    }
}
