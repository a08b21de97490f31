//! Catalog supplier seam and the loader that drives the catalog slice.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::Ingredient;
use crate::mvi::RequestEvent;
use crate::store::{AppAction, Store};

use super::intent::IngredientsIntent;

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog request was not successful")]
    Unsuccessful,
}

/// Supplier of the immutable ingredient catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns a name for this source for logging.
    fn name(&self) -> &str;

    /// Fetch the full catalog.
    async fn fetch(&self) -> Result<Vec<Ingredient>, CatalogError>;
}

/// Body of the catalog endpoint: `{"success": true, "data": [...]}`.
#[derive(Debug, Deserialize)]
struct CatalogBody {
    success: bool,
    #[serde(default)]
    data: Option<Vec<Ingredient>>,
}

/// Catalog stored on disk in the shape the catalog endpoint returns.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse an endpoint body. A missing or null `data` is an empty catalog.
    fn parse(&self, content: &str) -> Result<Vec<Ingredient>, CatalogError> {
        let body: CatalogBody =
            serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;
        if !body.success {
            return Err(CatalogError::Unsuccessful);
        }
        Ok(body.data.unwrap_or_default())
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<Vec<Ingredient>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::ReadError {
                path: self.path.clone(),
                source: e,
            })?;
        self.parse(&content)
    }
}

/// Rejection dispatched when the load future is dropped mid-request.
pub const CATALOG_CANCELLED_MESSAGE: &str = "Catalog request cancelled";

/// Load the catalog into `store`, dispatching the request lifecycle.
///
/// Exactly one terminal event follows the pending event, also when the
/// returned future is dropped early. Returns the number of loaded
/// ingredients.
pub async fn load_catalog(store: &Store, source: &dyn CatalogSource) -> Result<usize, CatalogError> {
    store.dispatch(AppAction::Ingredients(IngredientsIntent::Load(
        RequestEvent::Pending,
    )));
    let guard = store.cancel_guard(AppAction::Ingredients(IngredientsIntent::Load(
        RequestEvent::rejected(CATALOG_CANCELLED_MESSAGE),
    )));

    let fetched = source.fetch().await;
    guard.disarm();

    match fetched {
        Ok(ingredients) => {
            let count = ingredients.len();
            tracing::info!(source = source.name(), count, "Ingredient catalog loaded");
            store.dispatch(AppAction::Ingredients(IngredientsIntent::Load(
                RequestEvent::Fulfilled(ingredients),
            )));
            Ok(count)
        }
        Err(e) => {
            tracing::warn!(source = source.name(), error = %e, "Ingredient catalog failed to load");
            store.dispatch(AppAction::Ingredients(IngredientsIntent::Load(
                RequestEvent::rejected(e.to_string()),
            )));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_null_data() {
        let catalog = FileCatalog::new("mem");
        let parsed = catalog.parse(r#"{"success": true, "data": null}"#).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn parse_rejects_unsuccessful_body() {
        let catalog = FileCatalog::new("mem");
        let err = catalog.parse(r#"{"success": false}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Unsuccessful));
    }

    #[test]
    fn parse_reports_path_on_bad_json() {
        let catalog = FileCatalog::new("catalog.json");
        let err = catalog.parse("{not json").unwrap_err();
        assert!(err.to_string().contains("catalog.json"));
    }
}
